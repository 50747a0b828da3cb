/// Semantic checks run on every config that is loaded or stored.
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}
