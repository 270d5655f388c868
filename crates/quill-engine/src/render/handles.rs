use std::fmt;

/// Render-pass-local identifier for a code block.
///
/// Handles are allocated from a counter that starts at zero for every
/// render pass. They never collide within one tree and mean nothing across
/// renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandleId(u32);

impl HandleId {
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for HandleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "code-{}", self.0)
    }
}

/// Side channel from handle to the raw source of its code block.
///
/// Owned by one [`RenderTree`](super::RenderTree); the copy-to-clipboard
/// collaborator reads code through it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeHandles {
    codes: Vec<String>,
}

impl CodeHandles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `raw_code` and returns the next handle of this pass.
    pub fn register(&mut self, raw_code: String) -> HandleId {
        let id = HandleId(self.codes.len() as u32);
        self.codes.push(raw_code);
        id
    }

    /// Raw code for a handle issued by this pass.
    pub fn code(&self, handle: HandleId) -> Option<&str> {
        self.codes.get(handle.0 as usize).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_count_up_from_zero() {
        let mut handles = CodeHandles::new();
        let a = handles.register("a".into());
        let b = handles.register("b".into());
        assert_eq!(a.get(), 0);
        assert_eq!(b.get(), 1);
        assert_eq!(handles.code(b), Some("b"));
    }

    #[test]
    fn foreign_handle_is_unknown() {
        let mut other = CodeHandles::new();
        other.register("x".into());
        other.register("y".into());
        let stale = other.register("z".into());

        let handles = CodeHandles::new();
        assert_eq!(handles.code(stale), None);
    }

    #[test]
    fn display_is_dom_friendly() {
        let mut handles = CodeHandles::new();
        assert_eq!(handles.register(String::new()).to_string(), "code-0");
    }
}
