use libc::{getrusage, rusage, timeval, RUSAGE_SELF};
use std::io;
use std::time::{Duration, Instant};

/// Time spent between `Timer::start` and `Timer::stop`
#[derive(Debug, Copy, Clone)]
pub struct Elapsed {
    /// user + system time charged to this process
    pub cpu: Duration,
    pub wall: Duration,
}

/// Measures both processor time and wall-clock time
#[derive(Debug, Copy, Clone)]
pub struct Timer {
    cpu: Duration,
    wall: Instant,
}

impl Timer {
    pub fn start() -> io::Result<Self> {
        Ok(Self {
            cpu: cpu_time()?,
            wall: Instant::now(),
        })
    }

    pub fn stop(&self) -> io::Result<Elapsed> {
        let wall = self.wall.elapsed();
        let cpu = cpu_time()?.saturating_sub(self.cpu);
        Ok(Elapsed { cpu, wall })
    }
}

fn to_duration(tv: timeval) -> Duration {
    Duration::from_secs(tv.tv_sec as u64) + Duration::from_micros(tv.tv_usec as u64)
}

/// Processor time used by this process so far
fn cpu_time() -> io::Result<Duration> {
    let mut usage: rusage = unsafe { std::mem::zeroed() };
    if unsafe { getrusage(RUSAGE_SELF, &mut usage) } != 0 {
        return Err(io::Error::last_os_error());
    }

    Ok(to_duration(usage.ru_utime) + to_duration(usage.ru_stime))
}
