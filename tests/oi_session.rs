//! End-to-end tests for the OI driver over the mock transport.

use std::time::Duration;
use vahana_oi::devices::roomba::{
    Baud, Demo, DriverConfig, EventType, Roomba, StreamPhase, frame_checksum,
};
use vahana_oi::transport::MockTransport;

const TIMEOUT: Duration = Duration::from_millis(10);

/// Driver with no pacing and a short timeout, plus a handle to its transport
fn fast_robot() -> (Roomba<MockTransport>, MockTransport) {
    let mock = MockTransport::new();
    let config = DriverConfig {
        read_timeout: TIMEOUT,
        pacing_delay: Duration::ZERO,
    };
    (Roomba::new(mock.clone(), Baud::Baud57600, config), mock)
}

fn frame(payload: &[u8]) -> Vec<u8> {
    let mut bytes = vec![19, payload.len() as u8];
    bytes.extend_from_slice(payload);
    bytes.push(frame_checksum(payload));
    bytes
}

// ============================================================================
// Commands
// ============================================================================

#[test]
fn test_drive_emits_big_endian_operands() {
    let (mut robot, mock) = fast_robot();

    robot.drive(-300, 500).unwrap();

    assert_eq!(mock.get_written(), vec![137, 0xFE, 0xD4, 0x01, 0xF4]);
}

#[test]
fn test_every_byte_is_paced() {
    let mock = MockTransport::new();
    let mut robot = Roomba::new(mock.clone(), Baud::Baud57600, DriverConfig::default());

    robot.leds(0x02, 0, 128).unwrap();

    assert_eq!(mock.get_written(), vec![139, 0x02, 0, 128]);
    assert_eq!(mock.pauses(), vec![Duration::from_millis(50); 4]);
}

#[test]
fn test_commands_reach_transport_in_order() {
    let (mut robot, mock) = fast_robot();

    robot.start().unwrap();
    robot.safe_mode().unwrap();
    robot.full_mode().unwrap();
    robot.demo(Demo::Abort).unwrap();
    robot.drive_direct(200, -200).unwrap();
    robot.song(0, &[72, 32, 74, 32]).unwrap();
    robot.play_song(0).unwrap();
    robot.dock().unwrap();
    robot.power().unwrap();

    assert_eq!(
        mock.get_written(),
        vec![
            128, //
            131, //
            132, //
            136, 255, //
            145, 0xFF, 0x38, 0x00, 0xC8, //
            140, 0, 2, 72, 32, 74, 32, //
            141, 0, //
            143, //
            133,
        ]
    );
    assert_eq!(mock.baud_changes(), vec![57600]);
}

#[test]
fn test_script_building_commands() {
    let (mut robot, mock) = fast_robot();

    robot.script(&[137, 0x01, 0x2C, 0x80, 0x00]).unwrap();
    robot.play_script().unwrap();
    robot.wait(10).unwrap();
    robot.wait_distance(500).unwrap();
    robot.wait_angle(-90).unwrap();
    robot.wait_event(EventType::LeftBump).unwrap();
    robot.wait_event(EventType::LeftBump.inverse()).unwrap();

    assert_eq!(
        mock.get_written(),
        vec![
            152, 5, 137, 0x01, 0x2C, 0x80, 0x00, //
            153, //
            155, 10, //
            156, 0x01, 0xF4, //
            157, 0xFF, 0xA6, //
            158, 6, //
            158, 0xFA,
        ]
    );
}

#[test]
fn test_accessory_commands() {
    let (mut robot, mock) = fast_robot();

    robot.digit_leds_raw([0x3F, 0x06, 0x5B, 0x4F]).unwrap();
    robot.digital_out(0x07).unwrap();
    robot.pwm_drivers(1, 2, 3).unwrap();
    robot.drivers(0x05).unwrap();
    robot.send_ir(130).unwrap();
    robot.spot().unwrap();
    robot.cover().unwrap();
    robot.reset().unwrap();

    assert_eq!(
        mock.get_written(),
        vec![
            163, 0x3F, 0x06, 0x5B, 0x4F, //
            147, 0x07, //
            144, 3, 2, 1, //
            138, 0x05, //
            151, 130, //
            134, //
            135, //
            7,
        ]
    );
}

#[test]
fn test_baud_change_reconfigures_transport_after_sending() {
    let (mut robot, mock) = fast_robot();

    robot.set_baud(Baud::Baud115200).unwrap();

    assert_eq!(mock.get_written(), vec![129, 11]);
    assert_eq!(mock.baud_changes(), vec![115200]);
    assert_eq!(robot.baud(), Baud::Baud115200);
    assert_eq!(robot.baud_rate(), 115200);
}

// ============================================================================
// Blocking sensor reads
// ============================================================================

#[test]
fn test_get_sensors_reads_exact_length() {
    let (mut robot, mock) = fast_robot();
    mock.inject_read(&[0x03, 0xAA, 0xBB]);

    let mut dest = [0u8; 2];
    assert!(robot.get_sensors(7, &mut dest).unwrap());

    assert_eq!(mock.get_written(), vec![142, 7]);
    assert_eq!(dest, [0x03, 0xAA]);
    // Never reads past the requested length
    assert_eq!(mock.pending_read(), 1);
}

#[test]
fn test_get_sensors_list() {
    let (mut robot, mock) = fast_robot();
    mock.inject_read(&[0x01, 0x00, 0x10]);

    let mut dest = [0u8; 3];
    assert!(robot.get_sensors_list(&[7, 22], &mut dest).unwrap());

    assert_eq!(mock.get_written(), vec![149, 2, 7, 22]);
    assert_eq!(dest, [0x01, 0x00, 0x10]);
}

#[test]
fn test_get_sensors_timeout_reports_failure() {
    let (mut robot, mock) = fast_robot();
    mock.inject_read(&[0x11, 0x22]);

    let mut dest = [0xEEu8; 4];
    assert!(!robot.get_sensors(6, &mut dest).unwrap());

    // The two bytes that did arrive were copied, nothing beyond them
    assert_eq!(dest, [0x11, 0x22, 0xEE, 0xEE]);
    assert!(mock.elapsed() > TIMEOUT);
}

#[test]
fn test_timeout_is_per_byte() {
    let (mut robot, mock) = fast_robot();
    mock.inject_read(&[1, 2, 3]);

    let mut dest = [0u8; 3];
    assert!(robot.get_data(&mut dest).unwrap());
    assert_eq!(dest, [1, 2, 3]);
    // Data was always ready, so no virtual time passed
    assert_eq!(mock.elapsed(), Duration::ZERO);

    assert!(!robot.get_data(&mut [0u8; 1]).unwrap());
}

#[test]
fn test_discard_input_resynchronises_after_timeout() {
    let (mut robot, mock) = fast_robot();

    // Reply arrives too short, the rest turns up later
    mock.inject_read(&[0x01]);
    assert!(!robot.get_sensors(7, &mut [0u8; 2]).unwrap());
    mock.inject_read(&[0x02, 0x03]);

    assert_eq!(robot.discard_input().unwrap(), 2);
    assert_eq!(robot.stream_state().phase(), StreamPhase::Idle);

    mock.inject_read(&[0x09]);
    let mut dest = [0u8; 1];
    assert!(robot.get_sensors(7, &mut dest).unwrap());
    assert_eq!(dest, [0x09]);
}

// ============================================================================
// Script read
// ============================================================================

#[test]
fn test_get_script_copies_script() {
    let (mut robot, mock) = fast_robot();
    mock.inject_read(&[3, 137, 0, 100]);

    let mut dest = [0u8; 8];
    assert_eq!(robot.get_script(&mut dest).unwrap(), 3);

    assert_eq!(mock.get_written(), vec![154]);
    assert_eq!(&dest[..3], &[137, 0, 100]);
}

#[test]
fn test_get_script_small_buffer_consumes_full_script() {
    let (mut robot, mock) = fast_robot();
    mock.inject_read(&[4, 1, 2, 3, 4, 0xAB]);

    let mut dest = [0u8; 2];
    assert_eq!(robot.get_script(&mut dest).unwrap(), 4);

    assert_eq!(dest, [1, 2]);
    assert_eq!(mock.pending_read(), 1);
}

#[test]
fn test_get_script_length_probe() {
    let (mut robot, mock) = fast_robot();
    mock.inject_read(&[2, 0x55, 0x66]);

    assert_eq!(robot.get_script(&mut []).unwrap(), 2);
    assert_eq!(mock.pending_read(), 0);
}

#[test]
fn test_get_script_rejects_oversized_length() {
    let (mut robot, mock) = fast_robot();
    let mut reply = vec![150];
    reply.extend(std::iter::repeat_n(0x11, 150));
    mock.inject_read(&reply);

    assert_eq!(robot.get_script(&mut [0u8; 4]).unwrap(), 0);

    // Only the length byte was consumed
    assert_eq!(mock.pending_read(), 150);
}

#[test]
fn test_get_script_empty() {
    let (mut robot, mock) = fast_robot();
    mock.inject_read(&[0, 0x77]);

    assert_eq!(robot.get_script(&mut [0u8; 4]).unwrap(), 0);
    assert_eq!(mock.pending_read(), 1);
}

#[test]
fn test_get_script_timeouts() {
    let (mut robot, mock) = fast_robot();
    assert_eq!(robot.get_script(&mut [0u8; 4]).unwrap(), 0);

    mock.inject_read(&[5, 1, 2]);
    assert_eq!(robot.get_script(&mut [0u8; 4]).unwrap(), 0);
}

// ============================================================================
// Stream decoding
// ============================================================================

#[test]
fn test_stream_command_and_frame() {
    let (mut robot, mock) = fast_robot();

    robot.stream(&[7, 8]).unwrap();
    assert_eq!(mock.get_written(), vec![148, 2, 7, 8]);

    mock.inject_read(&frame(&[7, 0x01, 8, 0x00]));
    let mut dest = [0u8; 4];
    assert_eq!(robot.poll_sensors(&mut dest).unwrap(), Some(true));
    assert_eq!(dest, [7, 0x01, 8, 0x00]);
    assert_eq!(robot.poll_sensors(&mut dest).unwrap(), None);
}

#[test]
fn test_stream_frame_split_at_every_boundary() {
    let payload = [7, 0x03, 29, 0x01, 0xF2];
    let bytes = frame(&payload);

    for split in 0..=bytes.len() {
        let (mut robot, mock) = fast_robot();
        let mut dest = [0u8; 5];

        mock.inject_read(&bytes[..split]);
        let first = robot.poll_sensors(&mut dest).unwrap();
        mock.inject_read(&bytes[split..]);
        let second = robot.poll_sensors(&mut dest).unwrap();

        let results: Vec<bool> = [first, second].into_iter().flatten().collect();
        assert_eq!(results, vec![true], "split at {}", split);
        assert_eq!(dest, payload);
        assert_eq!(mock.pending_read(), 0);
    }
}

#[test]
fn test_stream_byte_at_a_time() {
    let (mut robot, mock) = fast_robot();
    let bytes = frame(&[1, 2, 3, 4, 5, 6]);
    let mut dest = [0u8; 6];
    let mut results = Vec::new();

    for (i, &b) in bytes.iter().enumerate() {
        mock.inject_read(&[b]);
        if let Some(valid) = robot.poll_sensors(&mut dest).unwrap() {
            results.push((i, valid));
        }
    }

    // Completes exactly on the N+3'th byte
    assert_eq!(results, vec![(bytes.len() - 1, true)]);
}

#[test]
fn test_stream_stops_at_frame_boundary() {
    let (mut robot, mock) = fast_robot();
    let mut bytes = frame(&[0xAA]);
    bytes.extend(frame(&[0xBB]));
    mock.inject_read(&bytes);

    let mut dest = [0u8; 1];
    assert_eq!(robot.poll_sensors(&mut dest).unwrap(), Some(true));
    assert_eq!(dest, [0xAA]);
    assert_eq!(mock.pending_read(), 4);

    assert_eq!(robot.poll_sensors(&mut dest).unwrap(), Some(true));
    assert_eq!(dest, [0xBB]);
}

#[test]
fn test_stream_corrupted_checksum_then_valid_frame() {
    let (mut robot, mock) = fast_robot();
    let mut bad = frame(&[5, 6, 7]);
    let last = bad.len() - 1;
    bad[last] = bad[last].wrapping_add(1);
    mock.inject_read(&bad);
    mock.inject_read(&frame(&[8, 9, 10]));

    let mut dest = [0u8; 3];
    assert_eq!(robot.poll_sensors(&mut dest).unwrap(), Some(false));
    assert_eq!(robot.stream_state().phase(), StreamPhase::Idle);
    assert_eq!(robot.poll_sensors(&mut dest).unwrap(), Some(true));
    assert_eq!(dest, [8, 9, 10]);
}

#[test]
fn test_stream_tolerates_leading_garbage() {
    let (mut robot, mock) = fast_robot();
    mock.inject_read(&[0x00, 0x42, 0xFF, 0x7E]);
    mock.inject_read(&frame(&[0x10, 0x20]));

    let mut dest = [0u8; 2];
    assert_eq!(robot.poll_sensors(&mut dest).unwrap(), Some(true));
    assert_eq!(dest, [0x10, 0x20]);
}

#[test]
fn test_stream_truncates_into_small_buffer() {
    let (mut robot, mock) = fast_robot();
    let payload: Vec<u8> = (1..=10).collect();
    mock.inject_read(&frame(&payload));

    let mut dest = [0u8; 4];
    assert_eq!(robot.poll_sensors(&mut dest).unwrap(), Some(true));
    assert_eq!(dest, [1, 2, 3, 4]);
    assert_eq!(robot.stream_state().expected_len(), 10);
    assert_eq!(mock.pending_read(), 0);
}

#[test]
fn test_stream_truncated_bad_checksum_still_reported() {
    let (mut robot, mock) = fast_robot();
    let mut bad = frame(&[1, 2, 3, 4, 5]);
    let last = bad.len() - 1;
    bad[last] ^= 0x80;
    mock.inject_read(&bad);

    let mut dest = [0u8; 2];
    assert_eq!(robot.poll_sensors(&mut dest).unwrap(), Some(false));
}

#[test]
fn test_poll_with_nothing_available_returns_immediately() {
    let (mut robot, _mock) = fast_robot();
    let mut dest = [0u8; 4];
    assert_eq!(robot.poll_sensors(&mut dest).unwrap(), None);
    assert_eq!(robot.stream_state().phase(), StreamPhase::Idle);
}
