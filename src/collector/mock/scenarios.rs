//! Pre-built mock filesystem scenarios for testing.

use super::filesystem::MockFs;
use crate::collector::traits::FsUsage;

const GIB: u64 = 1024 * 1024 * 1024;

impl MockFs {
    /// Creates a typical system: CPU/memory counters, a few mounts and
    /// three processes (init, a shell and a busy worker).
    pub fn typical_system() -> Self {
        let mut fs = Self::new();

        fs.add_file(
            "/proc/meminfo",
            "\
MemTotal:       16384000 kB
MemFree:         8192000 kB
MemAvailable:   12000000 kB
Buffers:          512000 kB
Cached:          2048000 kB
SwapCached:            0 kB
Active:          4096000 kB
Inactive:        2048000 kB
SwapTotal:       4096000 kB
SwapFree:        4096000 kB
Dirty:              1024 kB
Writeback:             0 kB
Slab:             512000 kB
SReclaimable:     256000 kB
",
        );
        fs.add_file(
            "/proc/stat",
            "\
cpu  10000 500 3000 80000 1000 200 100 0 0 0
cpu0 2500 125 750 20000 250 50 25 0 0 0
cpu1 2500 125 750 20000 250 50 25 0 0 0
cpu2 2500 125 750 20000 250 50 25 0 0 0
cpu3 2500 125 750 20000 250 50 25 0 0 0
intr 1000000 50 0 0 0 0 0 0 0 1 0 0 0 100 0 0 1000
ctxt 500000
btime 1700000000
processes 10000
procs_running 2
procs_blocked 0
",
        );
        fs.add_file(
            "/proc/mounts",
            "\
/dev/sda1 / ext4 rw,relatime 0 0
proc /proc proc rw,nosuid,nodev,noexec,relatime 0 0
sysfs /sys sysfs rw,nosuid,nodev,noexec,relatime 0 0
tmpfs /run tmpfs rw,nosuid,nodev,size=1638400k,mode=755 0 0
/dev/sda2 /home ext4 rw,relatime 0 0
/dev/nvme0n1p1 /boot/efi vfat rw,relatime,fmask=0077,dmask=0077 0 0
",
        );
        fs.set_usage(
            "/",
            FsUsage {
                total: 100 * GIB,
                free_all: 40 * GIB,
                available: 35 * GIB,
            },
        );
        fs.set_usage(
            "/home",
            FsUsage {
                total: 400 * GIB,
                free_all: 300 * GIB,
                available: 280 * GIB,
            },
        );
        fs.set_usage(
            "/boot/efi",
            FsUsage {
                total: GIB / 2,
                free_all: GIB / 4,
                available: GIB / 4,
            },
        );
        fs.set_usage(
            "/run",
            FsUsage {
                total: GIB,
                free_all: GIB,
                available: GIB,
            },
        );

        // PID 1 - systemd, started 1 jiffy after boot.
        fs.add_process(
            1,
            "1 (systemd) S 0 1 1 0 -1 4194560 50000 1000000 100 500 1000 500 2000 1000 20 0 1 0 1 170000000 3000 18446744073709551615 0 0 0 0 0 0 0 0 1073745152 0 0 0 17 0 0 0 0 0 0 0 0 0 0 0 0 0 0",
            "\
Name:\tsystemd
Pid:\t1
PPid:\t0
VmRSS:\t    12000 kB
",
            "systemd\n",
        );

        // PID 1000 - bash shell.
        fs.add_process(
            1000,
            "1000 (bash) S 999 1000 1000 34816 1001 4194304 5000 50000 0 0 100 50 200 100 20 0 1 0 100000 25000000 2000 18446744073709551615 0 0 0 0 0 0 65536 3670020 1266777851 0 0 0 17 2 0 0 0 0 0 0 0 0 0 0 0 0 0",
            "\
Name:\tbash
Pid:\t1000
PPid:\t999
VmRSS:\t    8000 kB
",
            "bash\n",
        );

        // PID 1001 - busy worker.
        fs.add_process(
            1001,
            "1001 (worker) R 1 1001 1001 0 -1 4194304 100000 0 50 0 50000 10000 0 0 20 0 8 0 200000 500000000 50000 18446744073709551615 0 0 0 0 0 0 0 0 0 0 0 0 17 3 0 0 0 0 0 0 0 0 0 0 0 0 0",
            "\
Name:\tworker
Pid:\t1001
PPid:\t1
VmRSS:\t   200000 kB
",
            "worker\n",
        );

        fs
    }

    /// A process whose name contains spaces and parentheses.
    pub fn with_special_names() -> Self {
        let mut fs = Self::typical_system();
        fs.add_process(
            5000,
            "5000 (Web (Content)) S 4999 5000 4999 0 -1 4194304 100000 0 500 0 5000 1000 0 0 20 0 20 0 500000 2000000000 50000 18446744073709551615 0 0 0 0 0 0 0 0 0 0 0 0 17 0 0 0 0 0 0 0 0 0 0 0 0 0 0",
            "Name:\tWeb Content\nPid:\t5000\nVmRSS:\t  300000 kB\n",
            "Web (Content)\n",
        );
        fs
    }

    /// A zombie process: no RSS line in `status`.
    pub fn with_zombie_process() -> Self {
        let mut fs = Self::typical_system();
        fs.add_process(
            4000,
            "4000 (defunct) Z 1000 4000 1000 0 -1 4194308 0 0 0 0 0 0 0 0 20 0 1 0 400000 0 0 18446744073709551615 0 0 0 0 0 0 0 0 0 0 0 0 -1 0 0 0 0 0 0 0 0 0 0 0 0 0 0",
            "Name:\tdefunct\nPid:\t4000\nPPid:\t1000\n",
            "defunct\n",
        );
        fs
    }

    /// An idle host: every CPU counter is zero.
    pub fn with_zero_cpu_counters() -> Self {
        let mut fs = Self::typical_system();
        fs.add_file(
            "/proc/stat",
            "cpu  0 0 0 0 0 0 0 0 0 0\nbtime 1700000000\n",
        );
        fs
    }
}
