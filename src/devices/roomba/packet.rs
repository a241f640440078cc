//! Outbound OI command encoding
//!
//! Every command is `[OPCODE] [PARAMS...]`. There is no header, length or
//! checksum on the command path; the robot knows each opcode's parameter
//! count. Variable-length commands (song, script, stream, query list) carry
//! their own count byte.
//!
//! # Pattern
//!
//! ```ignore
//! let mut pkt = TxPacket::new();   // Owned by the driver
//! pkt.set_drive(-300, 500);        // Encode any command
//! driver.send(&pkt)?;              // Emit byte-by-byte with pacing
//! pkt.set_safe_mode();             // Reuse, capacity is kept
//! ```
//!
//! Signed 16-bit parameters go out big-endian, high byte first.

use super::baud::Baud;
use super::constants::*;
use super::types::{Demo, StreamCommand, WaitEvent};

/// Initial capacity, enough for a 16-note song
const INITIAL_CAPACITY: usize = 40;

/// Reusable TX buffer for all OI commands
pub struct TxPacket {
    data: Vec<u8>,
}

impl TxPacket {
    pub fn new() -> Self {
        Self {
            data: Vec::with_capacity(INITIAL_CAPACITY),
        }
    }

    /// Encoded command bytes
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Opcode of the current command, if any
    #[inline]
    pub fn opcode(&self) -> Option<u8> {
        self.data.first().copied()
    }

    #[inline]
    fn begin(&mut self, opcode: u8) -> &mut Self {
        self.data.clear();
        self.data.push(opcode);
        self
    }

    #[inline]
    fn byte(&mut self, value: u8) -> &mut Self {
        self.data.push(value);
        self
    }

    #[inline]
    fn word(&mut self, value: i16) -> &mut Self {
        self.data.extend_from_slice(&value.to_be_bytes());
        self
    }

    #[inline]
    fn bytes(&mut self, values: &[u8]) -> &mut Self {
        self.data.extend_from_slice(values);
        self
    }

    // ========================================================================
    // Mode Commands
    // ========================================================================

    pub fn set_reset(&mut self) {
        self.begin(OP_RESET);
    }

    /// Start the OI, robot enters passive mode
    pub fn set_start(&mut self) {
        self.begin(OP_START);
    }

    pub fn set_baud(&mut self, baud: Baud) {
        self.begin(OP_BAUD).byte(baud.code());
    }

    pub fn set_safe_mode(&mut self) {
        self.begin(OP_SAFE);
    }

    pub fn set_full_mode(&mut self) {
        self.begin(OP_FULL);
    }

    /// Power down, robot enters passive mode
    pub fn set_power(&mut self) {
        self.begin(OP_POWER);
    }

    // ========================================================================
    // Cleaning / Demo Commands
    // ========================================================================

    pub fn set_spot(&mut self) {
        self.begin(OP_SPOT);
    }

    pub fn set_cover(&mut self) {
        self.begin(OP_COVER);
    }

    /// Cover and seek the dock (also used by `dock`)
    pub fn set_cover_and_dock(&mut self) {
        self.begin(OP_COVER_AND_DOCK);
    }

    pub fn set_demo(&mut self, demo: Demo) {
        self.begin(OP_DEMO).byte(demo as u8);
    }

    // ========================================================================
    // Motion Commands
    // ========================================================================

    /// Drive (CMD 137)
    ///
    /// Velocity in mm/s, radius in mm. Special radii (straight, spin in
    /// place) are plain values of the same field.
    pub fn set_drive(&mut self, velocity: i16, radius: i16) {
        self.begin(OP_DRIVE).word(velocity).word(radius);
    }

    /// Drive direct (CMD 145)
    ///
    /// Right wheel first, then left, each in mm/s.
    pub fn set_drive_direct(&mut self, left_velocity: i16, right_velocity: i16) {
        self.begin(OP_DRIVE_DIRECT)
            .word(right_velocity)
            .word(left_velocity);
    }

    // ========================================================================
    // Actuator Commands
    // ========================================================================

    pub fn set_leds(&mut self, leds: u8, power_colour: u8, power_intensity: u8) {
        self.begin(OP_LEDS)
            .byte(leds)
            .byte(power_colour)
            .byte(power_intensity);
    }

    /// Seven-segment digits, raw segment bitmaps, leftmost digit first
    pub fn set_digit_leds_raw(&mut self, digits: [u8; 4]) {
        self.begin(OP_DIGIT_LEDS_RAW).bytes(&digits);
    }

    /// Seven-segment digits as ASCII codes, leftmost digit first
    pub fn set_digit_leds_ascii(&mut self, digits: [u8; 4]) {
        self.begin(OP_DIGIT_LEDS_ASCII).bytes(&digits);
    }

    pub fn set_digital_outputs(&mut self, outputs: u8) {
        self.begin(OP_DIGITAL_OUTPUTS).byte(outputs);
    }

    /// Low side driver PWM duty cycles (CMD 144), sent driver 2 first
    pub fn set_pwm_low_side_drivers(&mut self, duty0: u8, duty1: u8, duty2: u8) {
        self.begin(OP_PWM_LOW_SIDE_DRIVERS)
            .byte(duty2)
            .byte(duty1)
            .byte(duty0);
    }

    pub fn set_low_side_drivers(&mut self, outputs: u8) {
        self.begin(OP_LOW_SIDE_DRIVERS).byte(outputs);
    }

    pub fn set_send_ir(&mut self, data: u8) {
        self.begin(OP_SEND_IR).byte(data);
    }

    /// Define a song (CMD 140)
    ///
    /// `notes` holds (note, duration) pairs, two bytes per note. The count
    /// byte is the number of notes; a trailing odd byte is still sent.
    pub fn set_song(&mut self, song_number: u8, notes: &[u8]) {
        self.begin(OP_SONG)
            .byte(song_number)
            .byte((notes.len() >> 1) as u8)
            .bytes(notes);
    }

    pub fn set_play_song(&mut self, song_number: u8) {
        self.begin(OP_PLAY_SONG).byte(song_number);
    }

    // ========================================================================
    // Sensor Commands
    // ========================================================================

    /// Request a single sensor packet (CMD 142)
    pub fn set_sensors(&mut self, packet_id: u8) {
        self.begin(OP_SENSORS).byte(packet_id);
    }

    /// Request a list of sensor packets (CMD 149)
    pub fn set_query_list(&mut self, packet_ids: &[u8]) {
        self.begin(OP_QUERY_LIST)
            .byte(packet_ids.len() as u8)
            .bytes(packet_ids);
    }

    /// Start a continuous sensor stream (CMD 148)
    pub fn set_stream(&mut self, packet_ids: &[u8]) {
        self.begin(OP_STREAM)
            .byte(packet_ids.len() as u8)
            .bytes(packet_ids);
    }

    pub fn set_stream_command(&mut self, command: StreamCommand) {
        self.begin(OP_PAUSE_RESUME_STREAM).byte(command as u8);
    }

    // ========================================================================
    // Script Commands
    // ========================================================================

    /// Upload a script (CMD 152), an empty script clears it
    pub fn set_script(&mut self, script: &[u8]) {
        self.begin(OP_SCRIPT)
            .byte(script.len() as u8)
            .bytes(script);
    }

    pub fn set_play_script(&mut self) {
        self.begin(OP_PLAY_SCRIPT);
    }

    pub fn set_show_script(&mut self) {
        self.begin(OP_SHOW_SCRIPT);
    }

    /// Wait in 15ms ticks (CMD 155)
    pub fn set_wait_time(&mut self, ticks: u8) {
        self.begin(OP_WAIT_TIME).byte(ticks);
    }

    pub fn set_wait_distance(&mut self, mm: i16) {
        self.begin(OP_WAIT_DISTANCE).word(mm);
    }

    pub fn set_wait_angle(&mut self, degrees: i16) {
        self.begin(OP_WAIT_ANGLE).word(degrees);
    }

    pub fn set_wait_event(&mut self, event: WaitEvent) {
        self.begin(OP_WAIT_EVENT).byte(event.code());
    }
}

impl Default for TxPacket {
    fn default() -> Self {
        Self::new()
    }
}
