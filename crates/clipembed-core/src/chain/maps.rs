//! Map links. Short links are expanded over the network before matching.

use url::Url;

use super::providers::{query_value, segments};
use super::Embed;
use crate::markup;

/// `maps.app.goo.gl/<id>` or `goo.gl/maps/<id>`
pub fn is_short_map_link(url: &Url) -> bool {
    match url.host_str() {
        Some("maps.app.goo.gl") => true,
        Some("goo.gl") => url.path().starts_with("/maps"),
        _ => false,
    }
}

/// `maps.google.<tld>/...` or `(www.)google.<tld>/maps...`
pub fn is_google_maps(url: &Url) -> bool {
    let Some(host) = url.host_str() else {
        return false;
    };
    let labels: Vec<&str> = host.split('.').collect();
    match labels.as_slice() {
        ["maps", "google", ..] => true,
        ["www", "google", ..] | ["google", ..] => url.path().starts_with("/maps"),
        _ => false,
    }
}

pub fn is_map_link(url: &Url) -> bool {
    is_short_map_link(url) || is_google_maps(url)
}

/// Embed for an (already expanded) map link.
///
/// Place names, `@lat,lng,zoom` views and `q=` searches become an embeddable
/// query frame. Anything else, including short links that could not be
/// expanded, becomes a plain link.
pub fn map_embed(url: &Url) -> Option<Embed> {
    if !is_map_link(url) {
        return None;
    }
    if is_short_map_link(url) {
        return Some(map_link(url));
    }

    let (query, zoom) = match map_query(url) {
        Some(found) => found,
        None => return Some(map_link(url)),
    };
    let mut params: Vec<(&str, String)> = vec![("q", query)];
    if let Some(z) = zoom {
        params.push(("z", z));
    }
    params.push(("output", "embed".to_string()));

    match Url::parse_with_params("https://maps.google.com/maps", &params) {
        Ok(embed) => Some(Embed::new(markup::iframe(embed.as_str()), "Google Maps location")),
        Err(_) => Some(map_link(url)),
    }
}

fn map_link(url: &Url) -> Embed {
    Embed::new(markup::link("Google Maps", url.as_str()), "Google Maps link")
}

/// Search text and optional zoom level encoded in a maps URL.
fn map_query(url: &Url) -> Option<(String, Option<String>)> {
    if let Some(q) = query_value(url, "q") {
        return Some((q, None));
    }

    let segs = segments(url);
    let view = segs.iter().find_map(|s| parse_view(s));

    if let Some(pos) = segs.iter().position(|s| *s == "place" || *s == "search") {
        if let Some(name) = segs.get(pos + 1).filter(|s| !s.starts_with('@')) {
            let decoded = urlencoding::decode(&name.replace('+', " ")).ok()?.into_owned();
            return Some((decoded, view.and_then(|(_, z)| z)));
        }
    }
    view
}

/// `@48.8584,2.2945,17z` → (`48.8584,2.2945`, `Some("17")`)
fn parse_view(segment: &str) -> Option<(String, Option<String>)> {
    let rest = segment.strip_prefix('@')?;
    let mut parts = rest.split(',');
    let lat = parts.next()?;
    let lng = parts.next()?;
    if lat.parse::<f64>().is_err() || lng.parse::<f64>().is_err() {
        return None;
    }
    let zoom = parts
        .next()
        .and_then(|z| z.strip_suffix('z'))
        .and_then(|z| z.parse::<f64>().ok())
        .map(|z| (z.round() as i64).to_string());
    Some((format!("{},{}", lat, lng), zoom))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn u(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn recognizes_map_hosts() {
        assert!(is_short_map_link(&u("https://maps.app.goo.gl/xyz")));
        assert!(is_short_map_link(&u("https://goo.gl/maps/xyz")));
        assert!(!is_short_map_link(&u("https://goo.gl/other")));
        assert!(is_google_maps(&u("https://www.google.com/maps/place/X")));
        assert!(is_google_maps(&u("https://maps.google.co.uk/?q=x")));
        assert!(is_google_maps(&u("https://google.de/maps/@1,2,3z")));
        assert!(!is_google_maps(&u("https://www.google.com/search?q=maps")));
    }

    #[test]
    fn place_name_with_view() {
        let e = map_embed(&u(
            "https://www.google.com/maps/place/Eiffel+Tower/@48.8583701,2.2944813,17z/data=!3m1",
        ))
        .unwrap();
        assert_eq!(
            e.markup,
            "{{iframe: https://maps.google.com/maps?q=Eiffel+Tower&z=17&output=embed}}"
        );
    }

    #[test]
    fn coordinates_only() {
        let e = map_embed(&u("https://www.google.com/maps/@40.7,-74.0,12.5z")).unwrap();
        assert_eq!(
            e.markup,
            "{{iframe: https://maps.google.com/maps?q=40.7%2C-74.0&z=13&output=embed}}"
        );
    }

    #[test]
    fn query_param_search() {
        let e = map_embed(&u("https://maps.google.com/?q=coffee%20near%20me")).unwrap();
        assert_eq!(
            e.markup,
            "{{iframe: https://maps.google.com/maps?q=coffee+near+me&output=embed}}"
        );
    }

    #[test]
    fn unexpanded_short_link_and_bare_maps_become_links() {
        assert_eq!(
            map_embed(&u("https://maps.app.goo.gl/xyz")).unwrap().markup,
            "[Google Maps](https://maps.app.goo.gl/xyz)"
        );
        assert_eq!(
            map_embed(&u("https://www.google.com/maps")).unwrap().markup,
            "[Google Maps](https://www.google.com/maps)"
        );
        assert!(map_embed(&u("https://example.com/maps")).is_none());
    }
}
