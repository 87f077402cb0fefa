use crate::models::{ResolvedProcess, SampleMatrix};
use std::thread;
use std::time::Duration;
use sysinfo::{ProcessesToUpdate, System};

/// Polls each resolved process's CPU % over fixed blocking windows.
pub struct Sampler {
    system: System,
    interval: Duration,
}

impl Sampler {
    pub fn new(interval: Duration) -> Self {
        if interval < sysinfo::MINIMUM_CPU_UPDATE_INTERVAL {
            log::warn!(
                "interval {:?} is below sysinfo's minimum CPU update interval ({:?}), readings may be inaccurate",
                interval,
                sysinfo::MINIMUM_CPU_UPDATE_INTERVAL
            );
        }
        Self {
            system: System::new(),
            interval,
        }
    }

    /// One full sampling pass over `processes`, iteration-major so every
    /// process is visited once before the next iteration starts.
    ///
    /// Each cell blocks the calling thread for the whole interval; with k
    /// processes and n iterations the pass takes about k * n * interval.
    pub fn sample(&mut self, processes: &[ResolvedProcess], iterations: usize) -> SampleMatrix {
        let mut matrix = SampleMatrix::new(processes.len(), iterations);

        for iteration in 0..iterations {
            for (index, target) in processes.iter().enumerate() {
                let cpu_percent = self.measure(target);
                matrix.record(index, iteration, cpu_percent);
                log::debug!(
                    "iteration {}: PID {} at {:.1}%",
                    iteration,
                    target.pid,
                    cpu_percent
                );
            }
        }

        matrix
    }

    /// CPU % consumed by one process during one interval-long window.
    ///
    /// The first refresh anchors the window, the second closes it, so
    /// `cpu_usage()` is relative to exactly this window. A PID missing after
    /// the second refresh means the process exited mid-run; that cell gets
    /// 0.0 and the pass continues.
    fn measure(&mut self, target: &ResolvedProcess) -> f32 {
        let pid = target.sysinfo_pid();
        let pids = [pid];

        self.system
            .refresh_processes(ProcessesToUpdate::Some(&pids), true);
        thread::sleep(self.interval);
        self.system
            .refresh_processes(ProcessesToUpdate::Some(&pids), true);

        match self.system.process(pid) {
            Some(process) => process.cpu_usage(),
            None => {
                log::warn!(
                    "process with PID {} no longer running, recording 0.0",
                    target.pid
                );
                0.0
            }
        }
    }
}
