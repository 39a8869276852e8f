/// Entities stored in a registry expose the key they are stored under.
pub trait Identifiable {
    fn id(&self) -> &str;
}

