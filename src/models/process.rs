use serde::Serialize;
use sysinfo::Pid;

/// A process that matched the requested name at resolution time.
///
/// Resolution happens once; the process may exit at any point afterwards.
/// The sampler treats that as an expected condition, not an error.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedProcess {
    /// Process ID at resolution time
    pub pid: u32,
    /// Name the process matched on
    pub name: String,
}

impl ResolvedProcess {
    pub fn new(pid: u32, name: String) -> Self {
        Self { pid, name }
    }

    /// The sysinfo handle for refresh/lookup calls.
    pub fn sysinfo_pid(&self) -> Pid {
        Pid::from_u32(self.pid)
    }
}
