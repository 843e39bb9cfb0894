use crate::transcript::Transcript;

// ============================================================================
// Subsystems
// ============================================================================

pub struct Cpu;

impl Cpu {
    pub fn freeze(&self) -> String {
        "CPU freeze".to_string()
    }

    pub fn jump(&self, position: &str) -> String {
        format!("CPU jump to {position}")
    }

    pub fn execute(&self) -> String {
        "CPU execute".to_string()
    }
}

pub struct Memory;

impl Memory {
    pub fn load(&self, position: &str) -> String {
        format!("Memory load {position}")
    }
}

pub struct HardDrive;

impl HardDrive {
    pub fn read(&self, size: usize) -> String {
        format!("Disk read {size} bytes")
    }
}

// ============================================================================
// Facade: one call hides the boot sequence
// ============================================================================

const BOOT_SECTOR: &str = "boot sector";
const SECTOR_SIZE: usize = 1024;

pub struct Computer {
    cpu: Cpu,
    memory: Memory,
    drive: HardDrive,
}

impl Computer {
    pub fn new() -> Self {
        Self {
            cpu: Cpu,
            memory: Memory,
            drive: HardDrive,
        }
    }

    pub fn start(&self) -> Vec<String> {
        vec![
            self.cpu.freeze(),
            self.memory.load(BOOT_SECTOR),
            self.drive.read(SECTOR_SIZE),
            self.cpu.jump(BOOT_SECTOR),
            self.cpu.execute(),
        ]
    }
}

impl Default for Computer {
    fn default() -> Self {
        Self::new()
    }
}

pub fn demo(out: &mut Transcript) {
    let computer = Computer::new();
    for step in computer.start() {
        out.line(step);
    }
}

pub const EXPECTED: &[&str] = &[
    "CPU freeze",
    "Memory load boot sector",
    "Disk read 1024 bytes",
    "CPU jump to boot sector",
    "CPU execute",
];
