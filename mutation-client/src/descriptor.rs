use std::{collections::HashMap, fmt};

/// The static description of a single mutation, usually generated at build time.
///
/// Descriptors are never mutated and live for the whole process, so they are normally declared
/// as `static` items and passed around by reference.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct MutationDescriptor {
    /// The GraphQL operation name, e.g. `AddTodo`.
    pub name: &'static str,
    /// The full GraphQL document.
    pub document: &'static str,
    /// The top-level field of the response data holding the payload, e.g. `addTodo`.
    pub root_field: &'static str,
    /// The variables declared by the document. A call must provide exactly these.
    pub variable_names: &'static [&'static str],
    /// The fields selected on the root field that make up the payload.
    pub selected_fields: &'static [&'static str]
}

impl MutationDescriptor {
    pub fn declares_variable(&self, name: &str) -> bool {
        self.variable_names.contains(&name)
    }
}

impl fmt::Debug for MutationDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MutationDescriptor")
            .field("name", &self.name)
            .field("root_field", &self.root_field)
            .field("variable_names", &self.variable_names)
            .field("selected_fields", &self.selected_fields)
            .finish()
    }
}

/// A read-only table of descriptors keyed by operation name.
///
/// It's built once, then shared between any number of concurrent calls.
#[derive(Debug, Clone, Default)]
pub struct DescriptorRegistry {
    descriptors: HashMap<&'static str, &'static MutationDescriptor>
}

impl DescriptorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a descriptor to the table. A descriptor with the same name replaces the old one.
    pub fn with(mut self, descriptor: &'static MutationDescriptor) -> Self {
        self.descriptors.insert(descriptor.name, descriptor);
        self
    }

    pub fn get(&self, name: &str) -> Option<&'static MutationDescriptor> {
        self.descriptors.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.descriptors.keys().copied()
    }
}

impl std::iter::FromIterator<&'static MutationDescriptor> for DescriptorRegistry {
    fn from_iter<I: IntoIterator<Item = &'static MutationDescriptor>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), Self::with)
    }
}
