// src/config/shims.rs
use super::consts::DELEGATE_SUFFIX;

/// How a shim treats the value returned by its delegate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    /// Returned value is dropped; normal return exits 0.
    FireAndForget,
    /// Returned value becomes the process exit status (absent → 0).
    Propagating,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShimSpec {
    pub tool: &'static str,
    pub variant: Variant,
    /// Look for the delegate next to the shim executable before `PATH`.
    pub sibling_first: bool,
}

impl ShimSpec {
    pub fn delegate_name(&self) -> String {
        join!(self.tool, DELEGATE_SUFFIX)
    }
}

pub const HTML2MD: ShimSpec = ShimSpec {
    tool: "html2md",
    variant: Variant::FireAndForget,
    sibling_first: false,
};

pub const S1F: ShimSpec = ShimSpec {
    tool: "s1f",
    variant: Variant::Propagating,
    sibling_first: false,
};

pub const SCRAPE: ShimSpec = ShimSpec {
    tool: "scrape",
    variant: Variant::Propagating,
    sibling_first: true,
};

pub static SHIMS: [ShimSpec; 3] = [HTML2MD, S1F, SCRAPE];

pub fn lookup(tool: &str) -> Option<&'static ShimSpec> {
    SHIMS.iter().find(|s| s.tool == tool)
}
