use uuid::Uuid;

/// Source of identifiers for newly created records.
pub trait IdGenerator: Send + Sync {
    fn next(&self) -> String;
}

/// Random UUID v4 ids.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic ids (`<prefix>1`, `<prefix>2`, ...) for tests.
#[cfg(test)]
pub struct SequentialIds {
    prefix: String,
    counter: std::sync::atomic::AtomicU64,
}

#[cfg(test)]
impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: std::sync::atomic::AtomicU64::new(0),
        }
    }
}

#[cfg(test)]
impl IdGenerator for SequentialIds {
    fn next(&self) -> String {
        let n = self
            .counter
            .fetch_add(1, std::sync::atomic::Ordering::Relaxed)
            + 1;
        format!("{}{}", self.prefix, n)
    }
}
