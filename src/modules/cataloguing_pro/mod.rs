// Professional Cataloguing Module
// Handles cutter resolution, literature suffix rules, and call number assembly

pub mod classification;
pub mod cutter;
pub mod literature;

pub fn init() {
    tracing::info!("Initializing Professional Cataloguing Module...");
}
