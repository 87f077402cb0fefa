use crate::models::ResolvedProcess;
use sysinfo::{ProcessesToUpdate, System};

/// Find every live process whose name exactly equals `name`.
///
/// The match is case-sensitive and whole-name: "chrome" does not match
/// "chrome.exe" and "Chrome" matches nothing if only "chrome" is running.
/// Returns the matches sorted by PID; an empty result is the caller's
/// problem to report.
pub fn resolve_processes(name: &str) -> Vec<ResolvedProcess> {
    let mut sys = System::new_all();
    sys.refresh_processes(ProcessesToUpdate::All, true);

    let mut matches: Vec<ResolvedProcess> = sys
        .processes()
        .iter()
        .filter(|(_, process)| process.name().to_string_lossy() == name)
        .map(|(pid, process)| {
            ResolvedProcess::new(pid.as_u32(), process.name().to_string_lossy().into_owned())
        })
        .collect();

    matches.sort_by_key(|process| process.pid);
    matches
}
