mod anatomy;
mod comparison;
mod education;
mod hero;
mod navigation;
mod verify;

pub use anatomy::AnatomySelector;
pub use comparison::InsuranceComparison;
pub use education::EducationHub;
pub use hero::HeroSection;
pub use navigation::Navigation;
pub use verify::BlockchainVerification;
