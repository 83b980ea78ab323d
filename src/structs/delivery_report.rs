#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReport {
    pub status: u16,
    pub attempts: u32,
}
