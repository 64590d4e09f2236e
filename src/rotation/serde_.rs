use super::{Quaternion, Rotation3D};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A rotation serializes as its raw quaternion, the four-element
/// sequence `[x, y, z, w]`.
impl Serialize for Rotation3D {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        let q = self.quaternion();
        [q.x, q.y, q.z, q.w].serialize(s)
    }
}

impl<'de> Deserialize<'de> for Rotation3D {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let [x, y, z, w] = <[f64; 4]>::deserialize(d)?;
        Ok(Rotation3D::from_quaternion(Quaternion::new(x, y, z, w)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Angle, RotationAxis3D};

    #[test]
    fn test_serializes_as_quaternion_sequence() {
        let json = serde_json::to_string(&Rotation3D::IDENTITY).unwrap();
        assert_eq!(json, "[0.0,0.0,0.0,1.0]");
    }

    #[test]
    fn test_round_trip() {
        let r = Rotation3D::from_angle_axis(Angle::from_degrees(40.0), RotationAxis3D::XY);
        let json = serde_json::to_string(&r).unwrap();
        let back: Rotation3D = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }

    #[test]
    fn test_deserializes_raw_quaternion() {
        let r: Rotation3D = serde_json::from_str("[0.0,0.0,1.0,0.0]").unwrap();
        assert_eq!(r.quaternion(), Quaternion::new(0.0, 0.0, 1.0, 0.0));
    }
}
