//! Vehicle enumerations and their display metadata.
//!
//! Each enumeration is stored in the database as its upper-case code
//! (`"SEMI_AUTOMATIC"`) and rendered to clients through a fixed mapping to a
//! small display record (name plus hex code or description).

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Colors
// ---------------------------------------------------------------------------

/// The fixed color palette a car can be offered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CarColor {
    Red,
    Green,
    Blue,
    Yellow,
    Black,
    White,
}

/// Display fields attached to a [`CarColor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorDisplay {
    pub name: &'static str,
    pub hex_code: &'static str,
}

impl CarColor {
    pub const ALL: [CarColor; 6] = [
        Self::Red,
        Self::Green,
        Self::Blue,
        Self::Yellow,
        Self::Black,
        Self::White,
    ];

    /// Convert from a database string value.
    pub fn from_str_value(s: &str) -> Result<Self, String> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| {
                format!(
                    "Invalid car color '{s}'. Must be one of: {}",
                    codes(&Self::ALL, Self::as_str)
                )
            })
    }

    /// Convert to the database string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Red => "RED",
            Self::Green => "GREEN",
            Self::Blue => "BLUE",
            Self::Yellow => "YELLOW",
            Self::Black => "BLACK",
            Self::White => "WHITE",
        }
    }

    pub fn display(&self) -> ColorDisplay {
        let (name, hex_code) = match self {
            Self::Red => ("Red", "#fc0303"),
            Self::Green => ("Green", "#03fc4e"),
            Self::Blue => ("Blue", "#0331fc"),
            Self::Yellow => ("Yellow", "#fcf403"),
            Self::Black => ("Black", "#080808"),
            Self::White => ("White", "#ffffff"),
        };
        ColorDisplay { name, hex_code }
    }
}

// ---------------------------------------------------------------------------
// Transmission
// ---------------------------------------------------------------------------

/// Gearbox kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Transmission {
    Automatic,
    Manual,
    SemiAutomatic,
}

/// Display fields attached to a [`Transmission`] or [`EngineType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindDisplay {
    pub name: &'static str,
    pub description: &'static str,
}

impl Transmission {
    pub const ALL: [Transmission; 3] = [Self::Automatic, Self::Manual, Self::SemiAutomatic];

    /// Convert from a database string value.
    pub fn from_str_value(s: &str) -> Result<Self, String> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| {
                format!(
                    "Invalid transmission '{s}'. Must be one of: {}",
                    codes(&Self::ALL, Self::as_str)
                )
            })
    }

    /// Convert to the database string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Automatic => "AUTOMATIC",
            Self::Manual => "MANUAL",
            Self::SemiAutomatic => "SEMI_AUTOMATIC",
        }
    }

    pub fn display(&self) -> KindDisplay {
        match self {
            Self::Automatic => KindDisplay {
                name: "Automatic",
                description: "A transmission that shifts gears automatically without \
                              requiring driver input.",
            },
            Self::Manual => KindDisplay {
                name: "Manual",
                description: "A transmission where the driver must manually change gears \
                              using a clutch and gear lever.",
            },
            Self::SemiAutomatic => KindDisplay {
                name: "Semi-Automatic",
                description: "A transmission that allows the driver to manually select gears \
                              but without a clutch pedal; gear changes are often \
                              electronically assisted.",
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Engine type
// ---------------------------------------------------------------------------

/// Power source of the car.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EngineType {
    Petrol,
    Diesel,
    Electric,
    Hybrid,
}

impl EngineType {
    pub const ALL: [EngineType; 4] = [Self::Petrol, Self::Diesel, Self::Electric, Self::Hybrid];

    /// Convert from a database string value.
    pub fn from_str_value(s: &str) -> Result<Self, String> {
        Self::ALL
            .into_iter()
            .find(|e| e.as_str() == s)
            .ok_or_else(|| {
                format!(
                    "Invalid engine type '{s}'. Must be one of: {}",
                    codes(&Self::ALL, Self::as_str)
                )
            })
    }

    /// Convert to the database string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Petrol => "PETROL",
            Self::Diesel => "DIESEL",
            Self::Electric => "ELECTRIC",
            Self::Hybrid => "HYBRID",
        }
    }

    pub fn display(&self) -> KindDisplay {
        match self {
            Self::Petrol => KindDisplay {
                name: "Petrol",
                description: "A common liquid fuel for internal combustion engines, refined \
                              from crude oil. Petrol engines ignite a mixture of petrol vapor \
                              and air with a spark plug, converting chemical energy into \
                              mechanical power. Petrol has a relatively high energy density \
                              and is widely available.",
            },
            Self::Diesel => KindDisplay {
                name: "Diesel",
                description: "A liquid fuel refined from crude oil and burned through \
                              compression ignition: air is compressed until hot enough to \
                              ignite the injected fuel. Diesel engines are often more fuel \
                              efficient than petrol engines and deliver higher torque, which \
                              suits larger vehicles and heavy-duty use.",
            },
            Self::Electric => KindDisplay {
                name: "Electric",
                description: "Vehicles driven by electric motors that draw energy from \
                              rechargeable batteries instead of an internal combustion \
                              engine. They produce zero tailpipe emissions, offer instant \
                              torque and quiet operation, and charge at home or at public \
                              charging stations.",
            },
            Self::Hybrid => KindDisplay {
                name: "Hybrid",
                description: "Vehicles combining an internal combustion engine with one or \
                              more electric motors and a battery. The electric side assists \
                              the engine, improves fuel efficiency and sometimes allows short \
                              electric-only driving. Mild, full and plug-in hybrids differ in \
                              how far they can drive on electricity alone.",
            },
        }
    }
}

/// Join the codes of a variant list for error messages.
fn codes<T: Copy>(all: &[T], as_str: fn(&T) -> &'static str) -> String {
    all.iter().map(as_str).collect::<Vec<_>>().join(", ")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
