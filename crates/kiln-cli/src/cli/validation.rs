use kiln_config::Profile;

/// Parse a `--profile` value.
///
/// Only `production` and `development` are accepted; the error lists both
/// so clap can show it verbatim.
pub fn parse_profile(s: &str) -> Result<Profile, String> {
    s.parse::<Profile>().map_err(|err| err.to_string())
}
