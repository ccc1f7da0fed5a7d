use uuid::Uuid;

use crate::shared::infrastructure::id_generator::IdGenerator;

#[derive(Debug, Default, Clone, Copy)]
pub struct UuidV7IdGenerator;

impl UuidV7IdGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl IdGenerator for UuidV7IdGenerator {
    fn generate(&self) -> String {
        Uuid::now_v7().to_string()
    }
}
