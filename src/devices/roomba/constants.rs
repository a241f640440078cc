//! Constants for the Roomba / Create Open Interface

// Opcodes: mode control
pub const OP_RESET: u8 = 7;
pub const OP_START: u8 = 128;
pub const OP_BAUD: u8 = 129;
pub const OP_SAFE: u8 = 131;
pub const OP_FULL: u8 = 132;
pub const OP_POWER: u8 = 133;

// Opcodes: cleaning and demos
pub const OP_SPOT: u8 = 134;
pub const OP_COVER: u8 = 135;
pub const OP_DEMO: u8 = 136;
pub const OP_COVER_AND_DOCK: u8 = 143; // Also "seek dock"

// Opcodes: actuators
pub const OP_DRIVE: u8 = 137;
pub const OP_LOW_SIDE_DRIVERS: u8 = 138;
pub const OP_LEDS: u8 = 139;
pub const OP_SONG: u8 = 140;
pub const OP_PLAY_SONG: u8 = 141;
pub const OP_PWM_LOW_SIDE_DRIVERS: u8 = 144;
pub const OP_DRIVE_DIRECT: u8 = 145;
pub const OP_DIGITAL_OUTPUTS: u8 = 147;
pub const OP_SEND_IR: u8 = 151;
pub const OP_DIGIT_LEDS_RAW: u8 = 163;
pub const OP_DIGIT_LEDS_ASCII: u8 = 164;

// Opcodes: sensors
pub const OP_SENSORS: u8 = 142;
pub const OP_STREAM: u8 = 148;
pub const OP_QUERY_LIST: u8 = 149;
pub const OP_PAUSE_RESUME_STREAM: u8 = 150;

// Opcodes: scripts and waits
pub const OP_SCRIPT: u8 = 152;
pub const OP_PLAY_SCRIPT: u8 = 153;
pub const OP_SHOW_SCRIPT: u8 = 154;
pub const OP_WAIT_TIME: u8 = 155;
pub const OP_WAIT_DISTANCE: u8 = 156;
pub const OP_WAIT_ANGLE: u8 = 157;
pub const OP_WAIT_EVENT: u8 = 158;

// Sensor stream framing: [0x13] [LEN] [PAYLOAD...] [CHECKSUM]
pub const STREAM_HEADER: u8 = 19;

/// Largest script the device can hold
pub const MAX_SCRIPT_LEN: u8 = 100;

// Timing defaults
pub const DEFAULT_READ_TIMEOUT_MS: u64 = 200;
pub const DEFAULT_PACING_DELAY_MS: u64 = 50;

// Sensor packet groups (ID, response length)
pub const PACKET_GROUP_BASIC: u8 = 0;
pub const PACKET_GROUP_BASIC_LEN: usize = 26;
pub const PACKET_BUMPS_WHEEL_DROPS: u8 = 7;
