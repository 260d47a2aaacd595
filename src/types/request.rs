use anyhow::Context;
use std::convert::TryFrom;
use std::fmt;
use std::fmt::Display;

use crate::types::passenger::Passenger;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    AddTargetFloor(i32),
    AddPassenger(Passenger),
    Move,
    Status,
}

impl Request {
    /// Floors named by the request, for bounds checks.
    pub fn floors(&self) -> Vec<i32> {
        match self {
            Request::AddTargetFloor(f) => vec![*f],
            Request::AddPassenger(p) => vec![p.desired_floor(), p.origin_floor()],
            Request::Move | Request::Status => Vec::new(),
        }
    }
}

impl Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Request::AddTargetFloor(v) => write!(f, "F{v}"),
            Request::AddPassenger(p) => write!(
                f,
                "P{},{},{}",
                p.desired_floor(),
                p.origin_floor(),
                p.request_time()
            ),
            Request::Move => write!(f, "M"),
            Request::Status => write!(f, "S"),
        }
    }
}

fn parse_field<T>(field: &str, name: &str) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    field
        .trim()
        .parse::<T>()
        .with_context(|| format!("failed to parse {name} '{field}'"))
}

impl TryFrom<&[u8]> for Request {
    type Error = anyhow::Error;

    fn try_from(value: &[u8]) -> anyhow::Result<Self> {
        let line = std::str::from_utf8(value)
            .context("request is not valid UTF-8")?
            .trim();
        let Some(cmd) = line.chars().next() else {
            anyhow::bail!("empty request");
        };
        let args = &line[cmd.len_utf8()..];

        match cmd {
            'F' => Ok(Request::AddTargetFloor(parse_field(args, "floor")?)),
            'P' => {
                let fields: Vec<&str> = args.split(',').collect();
                if fields.len() != 3 {
                    anyhow::bail!(
                        "passenger request needs desired,origin,time; got {} field(s)",
                        fields.len()
                    );
                }
                Ok(Request::AddPassenger(Passenger::new(
                    parse_field(fields[0], "desired floor")?,
                    parse_field(fields[1], "origin floor")?,
                    parse_field(fields[2], "request time")?,
                )))
            }
            'M' | 'S' if !args.is_empty() => {
                anyhow::bail!("'{cmd}' takes no argument, got '{args}'")
            }
            'M' => Ok(Request::Move),
            'S' => Ok(Request::Status),
            other => anyhow::bail!("unknown request: {other:?}"),
        }
    }
}

impl TryFrom<&str> for Request {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> anyhow::Result<Self> {
        Request::try_from(value.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_target_floor() {
        assert_eq!(
            Request::try_from("F7").unwrap(),
            Request::AddTargetFloor(7)
        );
        assert_eq!(
            Request::try_from("  F-2\n").unwrap(),
            Request::AddTargetFloor(-2)
        );
    }

    #[test]
    fn test_parse_passenger() {
        let req = Request::try_from("P3,0,12").unwrap();
        assert_eq!(req, Request::AddPassenger(Passenger::new(3, 0, 12)));
        assert_eq!(req.floors(), vec![3, 0]);
        assert_eq!(req.to_string(), "P3,0,12");
    }

    #[test]
    fn test_parse_bare_commands() {
        assert_eq!(Request::try_from("M").unwrap(), Request::Move);
        assert_eq!(Request::try_from("S").unwrap(), Request::Status);
        assert!(Request::Move.floors().is_empty());
    }

    #[test]
    fn test_rejects_malformed() {
        assert!(Request::try_from("").is_err());
        assert!(Request::try_from("F").is_err());
        assert!(Request::try_from("Fx").is_err());
        assert!(Request::try_from("P3,0").is_err());
        assert!(Request::try_from("M3").is_err());
        assert!(Request::try_from("X1").is_err());
        assert!(Request::try_from(&[0xffu8, 0xfe][..]).is_err());
    }
}
