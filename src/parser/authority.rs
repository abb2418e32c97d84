use crate::checkers::parse_port;
use crate::compat::ToString;
use crate::error::{ParseError, Result};
use crate::url_components::UrlComponents;

/// Parse `[user[:pass]@]host[:port]` into `components`.
pub fn parse_authority(authority: &str, components: &mut UrlComponents) -> Result<()> {
    let (userinfo, host_port) = match authority.rfind('@') {
        Some(at) => (Some(&authority[..at]), &authority[at + 1..]),
        None => (None, authority),
    };

    if let Some(userinfo) = userinfo {
        let (user, pass) = match userinfo.split_once(':') {
            Some((user, pass)) => (user, Some(pass)),
            None => (userinfo, None),
        };
        components.user = Some(user).filter(|u| !u.is_empty()).map(ToString::to_string);
        components.pass = pass.filter(|p| !p.is_empty()).map(ToString::to_string);
    }

    let (host, port) = parse_host_port_parts(host_port);
    if host.is_empty() {
        return Err(ParseError::InvalidHost);
    }
    components.host = Some(host.to_string());

    if let Some(port) = port.filter(|p| !p.is_empty()) {
        parse_port(port).ok_or(ParseError::InvalidPort)?;
        components.port = Some(port.to_string());
    }

    Ok(())
}

/// Split host string into hostname and optional port parts.
fn parse_host_port_parts(host: &str) -> (&str, Option<&str>) {
    match host.rfind(':') {
        Some(colon_pos) => (&host[..colon_pos], Some(&host[colon_pos + 1..])),
        None => (host, None),
    }
}
