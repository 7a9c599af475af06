mod machine_port;

pub use machine_port::MachinePort;
