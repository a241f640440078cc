//! Command operations for the OI driver
//!
//! Each method encodes one opcode into the session's [`TxPacket`] and emits
//! it. None of them read a response.
//!
//! [`TxPacket`]: super::packet::TxPacket

use super::constants::MAX_SCRIPT_LEN;
use super::types::{Demo, StreamCommand, WaitEvent};
use super::{Baud, Roomba};
use crate::error::Result;
use crate::transport::Transport;

impl<T: Transport> Roomba<T> {
    // ========================================================================
    // Mode Control
    // ========================================================================

    /// Soft reset, as if the battery had been reinserted
    pub fn reset(&mut self) -> Result<()> {
        self.tx.set_reset();
        self.send_tx()
    }

    /// Open the link at the session baud rate and start the OI (passive mode)
    pub fn start(&mut self) -> Result<()> {
        self.transport.set_baud_rate(self.baud.rate())?;
        log::info!("Starting OI at {} baud", self.baud.rate());
        self.tx.set_start();
        self.send_tx()
    }

    /// Change the robot's baud rate, then follow it on the host side
    ///
    /// There is no acknowledgement. The robot needs ~100ms before it accepts
    /// commands at the new rate.
    pub fn set_baud(&mut self, baud: Baud) -> Result<()> {
        self.tx.set_baud(baud);
        self.send_tx()?;

        self.baud = baud;
        self.transport.set_baud_rate(baud.rate())?;
        log::info!("Baud changed to {} ({:?})", baud.rate(), baud);
        Ok(())
    }

    pub fn safe_mode(&mut self) -> Result<()> {
        self.tx.set_safe_mode();
        self.send_tx()
    }

    pub fn full_mode(&mut self) -> Result<()> {
        self.tx.set_full_mode();
        self.send_tx()
    }

    /// Power the robot down
    pub fn power(&mut self) -> Result<()> {
        self.tx.set_power();
        self.send_tx()
    }

    // ========================================================================
    // Cleaning / Demos
    // ========================================================================

    pub fn spot(&mut self) -> Result<()> {
        self.tx.set_spot();
        self.send_tx()
    }

    pub fn cover(&mut self) -> Result<()> {
        self.tx.set_cover();
        self.send_tx()
    }

    pub fn cover_and_dock(&mut self) -> Result<()> {
        self.tx.set_cover_and_dock();
        self.send_tx()
    }

    /// Seek the dock (same opcode as cover-and-dock)
    pub fn dock(&mut self) -> Result<()> {
        self.cover_and_dock()
    }

    pub fn demo(&mut self, demo: Demo) -> Result<()> {
        self.tx.set_demo(demo);
        self.send_tx()
    }

    // ========================================================================
    // Motion
    // ========================================================================

    /// Drive at `velocity` mm/s along an arc of `radius` mm
    pub fn drive(&mut self, velocity: i16, radius: i16) -> Result<()> {
        self.tx.set_drive(velocity, radius);
        self.send_tx()
    }

    /// Drive each wheel independently, mm/s
    pub fn drive_direct(&mut self, left_velocity: i16, right_velocity: i16) -> Result<()> {
        self.tx.set_drive_direct(left_velocity, right_velocity);
        self.send_tx()
    }

    // ========================================================================
    // Actuators
    // ========================================================================

    pub fn leds(&mut self, leds: u8, power_colour: u8, power_intensity: u8) -> Result<()> {
        self.tx.set_leds(leds, power_colour, power_intensity);
        self.send_tx()
    }

    pub fn digit_leds_raw(&mut self, digits: [u8; 4]) -> Result<()> {
        self.tx.set_digit_leds_raw(digits);
        self.send_tx()
    }

    pub fn digit_leds_ascii(&mut self, digits: [u8; 4]) -> Result<()> {
        self.tx.set_digit_leds_ascii(digits);
        self.send_tx()
    }

    pub fn digital_out(&mut self, outputs: u8) -> Result<()> {
        self.tx.set_digital_outputs(outputs);
        self.send_tx()
    }

    /// PWM duty cycles for low side drivers 0-2
    pub fn pwm_drivers(&mut self, duty0: u8, duty1: u8, duty2: u8) -> Result<()> {
        self.tx.set_pwm_low_side_drivers(duty0, duty1, duty2);
        self.send_tx()
    }

    /// Switch low side drivers on or off (bitmask)
    pub fn drivers(&mut self, outputs: u8) -> Result<()> {
        self.tx.set_low_side_drivers(outputs);
        self.send_tx()
    }

    /// Modulate low side driver 1 with an IR byte
    pub fn send_ir(&mut self, data: u8) -> Result<()> {
        self.tx.set_send_ir(data);
        self.send_tx()
    }

    /// Define song `song_number` from (note, duration) byte pairs
    pub fn song(&mut self, song_number: u8, notes: &[u8]) -> Result<()> {
        self.tx.set_song(song_number, notes);
        self.send_tx()
    }

    pub fn play_song(&mut self, song_number: u8) -> Result<()> {
        self.tx.set_play_song(song_number);
        self.send_tx()
    }

    // ========================================================================
    // Sensor Stream Control
    // ========================================================================

    /// Start streaming the given sensor packets every 15ms
    ///
    /// Read the frames with [`Roomba::poll_sensors`].
    pub fn stream(&mut self, packet_ids: &[u8]) -> Result<()> {
        self.tx.set_stream(packet_ids);
        self.send_tx()
    }

    pub fn stream_command(&mut self, command: StreamCommand) -> Result<()> {
        self.tx.set_stream_command(command);
        self.send_tx()
    }

    // ========================================================================
    // Scripts
    // ========================================================================

    /// Store a script on the robot; an empty script clears it
    pub fn script(&mut self, script: &[u8]) -> Result<()> {
        if script.len() > MAX_SCRIPT_LEN as usize {
            log::warn!(
                "Script of {} bytes exceeds device limit of {}",
                script.len(),
                MAX_SCRIPT_LEN
            );
        }
        self.tx.set_script(script);
        self.send_tx()
    }

    pub fn play_script(&mut self) -> Result<()> {
        self.tx.set_play_script();
        self.send_tx()
    }

    /// Wait `ticks` × 15ms (script use)
    pub fn wait(&mut self, ticks: u8) -> Result<()> {
        self.tx.set_wait_time(ticks);
        self.send_tx()
    }

    pub fn wait_distance(&mut self, mm: i16) -> Result<()> {
        self.tx.set_wait_distance(mm);
        self.send_tx()
    }

    pub fn wait_angle(&mut self, degrees: i16) -> Result<()> {
        self.tx.set_wait_angle(degrees);
        self.send_tx()
    }

    /// Wait for an event, or for it to clear with [`EventType::inverse`]
    ///
    /// [`EventType::inverse`]: super::EventType::inverse
    pub fn wait_event(&mut self, event: impl Into<WaitEvent>) -> Result<()> {
        self.tx.set_wait_event(event.into());
        self.send_tx()
    }
}
