//! Parameter enumerations for OI commands

/// Built-in demos started by the `demo` opcode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Demo {
    /// Stop the running demo
    Abort = 255,
    Cover = 0,
    CoverAndDock = 1,
    SpotCover = 2,
    Mouse = 3,
    DriveFigureEight = 4,
    Wimp = 5,
    Home = 6,
    Tag = 7,
    Pachelbel = 8,
    Banjo = 9,
}

/// Argument of the pause/resume stream opcode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum StreamCommand {
    Pause = 0,
    Resume = 1,
}

/// Events the `wait event` opcode can block on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum EventType {
    WheelDrop = 1,
    FrontWheelDrop = 2,
    LeftWheelDrop = 3,
    RightWheelDrop = 4,
    Bump = 5,
    LeftBump = 6,
    RightBump = 7,
    VirtualWall = 8,
    Wall = 9,
    Cliff = 10,
    LeftCliff = 11,
    FrontLeftCliff = 12,
    FrontRightCliff = 13,
    RightCliff = 14,
    HomeBase = 15,
    AdvanceButton = 16,
    PlayButton = 17,
    DigitalInput0 = 18,
    DigitalInput1 = 19,
    DigitalInput2 = 20,
    DigitalInput3 = 21,
    OiModePassive = 22,
}

/// Event selector as sent on the wire
///
/// The OI waits for the inverse of an event when its code is negated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitEvent {
    Occurs(EventType),
    Clears(EventType),
}

impl EventType {
    /// Wait for this event to stop happening
    pub fn inverse(self) -> WaitEvent {
        WaitEvent::Clears(self)
    }
}

impl From<EventType> for WaitEvent {
    fn from(event: EventType) -> Self {
        WaitEvent::Occurs(event)
    }
}

impl WaitEvent {
    /// Signed code as a two's-complement byte
    pub fn code(self) -> u8 {
        match self {
            WaitEvent::Occurs(event) => event as u8,
            WaitEvent::Clears(event) => (-(event as i8)) as u8,
        }
    }
}
