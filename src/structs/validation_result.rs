use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub value: String,
    pub constraint: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.constraint)
    }
}

#[derive(Debug, Default)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<FieldError>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    pub fn from_findings(errors: Vec<FieldError>, warnings: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
            warnings,
        }
    }

    pub fn print_summary(&self) {
        if self.is_valid {
            println!("✅ Validation passed");
        } else {
            println!("❌ Validation failed with {} errors", self.errors.len());
        }

        if !self.warnings.is_empty() {
            println!("⚠️ {} warnings found", self.warnings.len());
        }

        for error in &self.errors {
            println!("   ❌ {error}");
        }

        for warning in &self.warnings {
            println!("   ⚠️ {warning}");
        }
    }
}
