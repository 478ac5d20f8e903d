//! Input data model for room and part specifications
//!
//! These types are the crate boundary: the upstream text parser (not part of
//! this crate) produces them, and [`crate::resolve_plan`] consumes them. They
//! carry serde derives so callers can also construct plans from their JSON
//! form; attachment references use the upstream `target:corner` string shape
//! in serialized form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Marker string for the virtual zero-point anchor.
pub const ZERO_POINT: &str = "zeropoint";

/// Marker string a part uses to attach to its owning room.
pub const PARENT: &str = "parent";

/// One of a rectangle's four corners.
///
/// A corner names both which corner of a reference rectangle to attach to
/// and which corner of the attaching rectangle aligns there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Default for Corner {
    fn default() -> Self {
        Corner::TopLeft
    }
}

impl Corner {
    pub fn as_str(&self) -> &'static str {
        match self {
            Corner::TopLeft => "top-left",
            Corner::TopRight => "top-right",
            Corner::BottomLeft => "bottom-left",
            Corner::BottomRight => "bottom-right",
        }
    }
}

impl fmt::Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Corner {
    type Err = AttachmentParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top-left" => Ok(Corner::TopLeft),
            "top-right" => Ok(Corner::TopRight),
            "bottom-left" => Ok(Corner::BottomLeft),
            "bottom-right" => Ok(Corner::BottomRight),
            other => Err(AttachmentParseError::UnknownCorner {
                corner: other.to_string(),
            }),
        }
    }
}

/// What an attachment reference points at.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AttachTarget {
    /// The virtual anchor fixed at (0,0).
    ZeroPoint,
    /// A part's owning room. Only meaningful inside a part's attachment.
    Parent,
    /// Another room (or, for parts, a sibling part) by identifier.
    Room(String),
}

impl AttachTarget {
    /// The name used for reference lookup and in error messages.
    pub fn name(&self) -> &str {
        match self {
            AttachTarget::ZeroPoint => ZERO_POINT,
            AttachTarget::Parent => PARENT,
            AttachTarget::Room(id) => id,
        }
    }
}

impl From<&str> for AttachTarget {
    fn from(s: &str) -> Self {
        match s {
            ZERO_POINT => AttachTarget::ZeroPoint,
            PARENT => AttachTarget::Parent,
            other => AttachTarget::Room(other.to_string()),
        }
    }
}

impl fmt::Display for AttachTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors from parsing the `target:corner` attachment string form.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AttachmentParseError {
    #[error("attachment '{input}' is not in 'target:corner' form")]
    MissingCorner { input: String },

    #[error(
        "unknown corner '{corner}' (expected top-left, top-right, bottom-left or bottom-right)"
    )]
    UnknownCorner { corner: String },
}

/// An attachment reference: which corner of which target to hang off.
///
/// Serializes as the upstream string form, e.g. `"kitchen:top-right"` or
/// `"zeropoint:top-left"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Attachment {
    pub target: AttachTarget,
    pub corner: Corner,
}

impl Attachment {
    pub fn new(target: impl Into<String>, corner: Corner) -> Self {
        let target: String = target.into();
        Self {
            target: AttachTarget::from(target.as_str()),
            corner,
        }
    }

    /// Attachment to the virtual zero point.
    pub fn zero_point(corner: Corner) -> Self {
        Self {
            target: AttachTarget::ZeroPoint,
            corner,
        }
    }

    /// Attachment of a part to its owning room.
    pub fn parent(corner: Corner) -> Self {
        Self {
            target: AttachTarget::Parent,
            corner,
        }
    }
}

impl fmt::Display for Attachment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.target, self.corner)
    }
}

impl FromStr for Attachment {
    type Err = AttachmentParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (target, corner) =
            s.rsplit_once(':')
                .ok_or_else(|| AttachmentParseError::MissingCorner {
                    input: s.to_string(),
                })?;
        Ok(Self {
            target: AttachTarget::from(target),
            corner: corner.parse()?,
        })
    }
}

impl TryFrom<String> for Attachment {
    type Error = AttachmentParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Attachment> for String {
    fn from(a: Attachment) -> String {
        a.to_string()
    }
}

/// A positioning offset applied after corner alignment, in plan units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Offset {
    #[serde(default)]
    pub dx: i64,
    #[serde(default)]
    pub dy: i64,
}

impl Offset {
    pub fn new(dx: i64, dy: i64) -> Self {
        Self { dx, dy }
    }
}

/// Specification of a single room.
///
/// Dimensions are in the plan's native units (whole millimeters in practice);
/// all arithmetic downstream is exact integer arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomSpec {
    /// Unique, stable identifier. Rooms and parts share one namespace.
    pub id: String,
    pub width: i64,
    pub depth: i64,
    /// Which corner of this room aligns at the attachment point.
    #[serde(default)]
    pub anchor: Corner,
    pub attach_to: Attachment,
    #[serde(default)]
    pub offset: Offset,
    /// Parts merged into this room's composite shape, in declaration order.
    #[serde(default)]
    pub parts: Vec<PartSpec>,
}

impl RoomSpec {
    pub fn new(id: impl Into<String>, width: i64, depth: i64, attach_to: Attachment) -> Self {
        Self {
            id: id.into(),
            width,
            depth,
            anchor: Corner::default(),
            attach_to,
            offset: Offset::default(),
            parts: vec![],
        }
    }

    pub fn with_anchor(mut self, anchor: Corner) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn with_offset(mut self, dx: i64, dy: i64) -> Self {
        self.offset = Offset::new(dx, dy);
        self
    }

    pub fn with_part(mut self, part: PartSpec) -> Self {
        self.parts.push(part);
        self
    }
}

/// Specification of a part: a rectangle merged into its owning room.
///
/// Same shape as [`RoomSpec`] except that its attachment target may be the
/// literal `parent` or a sibling part, and parts do not nest further.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartSpec {
    pub id: String,
    pub width: i64,
    pub depth: i64,
    #[serde(default)]
    pub anchor: Corner,
    pub attach_to: Attachment,
    #[serde(default)]
    pub offset: Offset,
}

impl PartSpec {
    pub fn new(id: impl Into<String>, width: i64, depth: i64, attach_to: Attachment) -> Self {
        Self {
            id: id.into(),
            width,
            depth,
            anchor: Corner::default(),
            attach_to,
            offset: Offset::default(),
        }
    }

    pub fn with_anchor(mut self, anchor: Corner) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn with_offset(mut self, dx: i64, dy: i64) -> Self {
        self.offset = Offset::new(dx, dy);
        self
    }
}
