//! Static device registry mapping upstream type codes to device names.
//!
//! Pure lookup data. An unmapped code is treated as an upstream data
//! contract violation and fails the transform, never a silent default.

/// Device type code to human-readable device name.
pub const TYPE_TO_DEVICE_MAPPINGS: &[(u32, &str)] = &[
    (1, "N30pro"),
    (2, "N30+F30"),
    (3, "SN30+SF30"),
    (4, "N30 ArcadeStick"),
    (5, "F30 Joystick"),
    (6, "Retro Receiver for Classic"),
    (7, "Retro Receiver for NES+SFC"),
    (8, "USB Adapter"),
    (9, "SN30pro+SF30pro"),
    (10, "N64"),
    (13, "N30 Pro 2"),
    (14, "M30 Modkit"),
    (15, "N30 Modkit"),
    (16, "SN30 Modkit"),
    (17, "SN30 V2"),
    (18, "N30 NS"),
    (20, "GBros Adapter"),
    (21, "USB Adapter for PS classic"),
    (22, "Retro Receiver for MD+Genesis"),
    (23, "M30"),
    (24, "P30 Modkit"),
    (25, "SN30 Pro+"),
    (26, "Dogbone Modkit"),
    (27, "S30 Modkit"),
    (28, "Lite"),
    (30, "Zero 2"),
    (31, "SN30 Pro Android"),
    (33, "Pro 2"),
    (34, "Arcade Stick"),
    (35, "Arcade Stick 2.5g Receiver"),
    (36, "Pro2 Wired for Xbox"),
    (37, "Pro2 Wired"),
    (39, "USB Adapter 2"),
    (40, "Ultimate Wired for Xbox"),
    (46, "Lite SE"),
    (47, "Lite 2"),
];

/// Look up the device name for a type code.
pub fn device_name(code: u32) -> Option<&'static str> {
    TYPE_TO_DEVICE_MAPPINGS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}
