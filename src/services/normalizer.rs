use std::collections::HashSet;

use crate::models::{GroundingChunk, Recommendation};

/// Projects grounding chunks into unique recommendations
///
/// Single pass, first-seen order. A chunk contributes only when it carries a maps
/// place with a non-empty title and uri; the first chunk with a given uri wins and
/// later duplicates are dropped.
pub fn normalize(chunks: &[GroundingChunk]) -> Vec<Recommendation> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut recommendations = Vec::new();

    for chunk in chunks {
        let Some(place) = &chunk.maps else {
            continue;
        };
        let (Some(title), Some(uri)) = (place.title.as_deref(), place.uri.as_deref()) else {
            continue;
        };
        if title.is_empty() || uri.is_empty() {
            continue;
        }

        if seen.insert(uri) {
            recommendations.push(Recommendation {
                title: title.to_string(),
                uri: uri.to_string(),
                address: None,
            });
        }
    }

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MapsPlace;

    fn partial(title: Option<&str>, uri: Option<&str>) -> GroundingChunk {
        GroundingChunk {
            maps: Some(MapsPlace {
                title: title.map(str::to_string),
                uri: uri.map(str::to_string),
                place_id: None,
            }),
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(normalize(&[]).is_empty());
    }

    #[test]
    fn test_first_uri_wins_and_order_is_kept() {
        let chunks = vec![
            GroundingChunk::maps("A", "uri-a"),
            GroundingChunk::maps("B", "uri-b"),
            GroundingChunk::maps("A again", "uri-a"),
            GroundingChunk::maps("C", "uri-c"),
            GroundingChunk::maps("B again", "uri-b"),
        ];

        let result = normalize(&chunks);

        let titles: Vec<&str> = result.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B", "C"]);
        let uris: Vec<&str> = result.iter().map(|r| r.uri.as_str()).collect();
        assert_eq!(uris, vec!["uri-a", "uri-b", "uri-c"]);
    }

    #[test]
    fn test_skips_chunks_without_complete_place() {
        let chunks = vec![
            GroundingChunk { maps: None },
            partial(None, Some("uri-a")),
            partial(Some("No link"), None),
            partial(Some(""), Some("uri-b")),
            partial(Some("Empty link"), Some("")),
            GroundingChunk::maps("Valid", "uri-c"),
        ];

        let result = normalize(&chunks);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Valid");
        assert_eq!(result[0].uri, "uri-c");
    }

    #[test]
    fn test_invalid_chunk_does_not_claim_uri() {
        // An empty-title chunk must not block a later valid one with the same uri
        let chunks = vec![
            partial(Some(""), Some("uri-a")),
            GroundingChunk::maps("Real", "uri-a"),
        ];

        let result = normalize(&chunks);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Real");
    }

    #[test]
    fn test_address_is_never_populated() {
        let result = normalize(&[GroundingChunk::maps("A", "uri-a")]);
        assert!(result[0].address.is_none());
    }

    #[test]
    fn test_deterministic() {
        let chunks = vec![
            GroundingChunk::maps("鼎泰豐", "uri-1"),
            GroundingChunk::maps("春水堂", "uri-2"),
            GroundingChunk::maps("鼎泰豐 信義店", "uri-1"),
        ];
        assert_eq!(normalize(&chunks), normalize(&chunks));
    }

    #[test]
    fn test_uniqueness_over_many_duplicates() {
        let chunks: Vec<GroundingChunk> = (0..40)
            .map(|i| GroundingChunk::maps(format!("Place {}", i), format!("uri-{}", i % 7)))
            .collect();

        let result = normalize(&chunks);

        assert_eq!(result.len(), 7);
        let unique: HashSet<&str> = result.iter().map(|r| r.uri.as_str()).collect();
        assert_eq!(unique.len(), result.len());
        for (i, rec) in result.iter().enumerate() {
            assert_eq!(rec.uri, format!("uri-{}", i));
            assert_eq!(rec.title, format!("Place {}", i));
        }
    }
}
