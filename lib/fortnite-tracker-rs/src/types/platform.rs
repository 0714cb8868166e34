use std::str::FromStr;

/// Error when a string cannot be converted into a platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidPlatform(pub String);

impl std::error::Error for InvalidPlatform {}

impl std::fmt::Display for InvalidPlatform {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "platform must contain a value of pc, xbl, or psn, got '{}'",
            self.0
        )
    }
}

/// A platform that can be queried
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Platform {
    Pc,
    Xbl,
    Psn,
}

impl Platform {
    /// Converts a platform into the code used in request paths
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Pc => "pc",
            Platform::Xbl => "xbl",
            Platform::Psn => "psn",
        }
    }

    /// Tries to convert a platform code into a Platform.
    ///
    /// Matching is exact and case-sensitive.
    pub fn from_code(code: &str) -> Result<Self, InvalidPlatform> {
        match code {
            "pc" => Ok(Platform::Pc),
            "xbl" => Ok(Platform::Xbl),
            "psn" => Ok(Platform::Psn),
            code => Err(InvalidPlatform(code.to_string())),
        }
    }
}

impl FromStr for Platform {
    type Err = InvalidPlatform;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

impl TryFrom<&str> for Platform {
    type Error = InvalidPlatform;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::from_code(s)
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_valid_codes() {
        for platform in [Platform::Pc, Platform::Xbl, Platform::Psn] {
            assert_eq!(platform.as_str().parse::<Platform>(), Ok(platform));
        }
    }

    #[test]
    fn parse_invalid_codes() {
        for code in ["", "PC", "Pc", "xbox", "ps4", " pc", "pc ", "switch"] {
            let err = code.parse::<Platform>().unwrap_err();
            assert_eq!(err, InvalidPlatform(code.to_string()));
        }
    }
}
