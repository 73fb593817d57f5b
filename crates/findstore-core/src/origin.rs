//! Origin resolution: turns a zip code or a free-form address into a coordinate.

use std::future::Future;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::LocateError;
use crate::gazetteer::Gazetteer;
use crate::types::{Coordinate, OriginSpec};

/// Characters left unescaped in an encoded address. Spaces become `%20`.
const ADDRESS_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'*');

/// A remote service that resolves addresses to coordinates.
pub trait Geocoder {
    /// Resolves an already percent-encoded one-line address.
    ///
    /// Implementations make exactly one outbound request and do not retry.
    fn geocode(
        &self,
        encoded_address: &str,
    ) -> impl Future<Output = Result<Coordinate, LocateError>> + Send;
}

/// Percent-encodes address text as UTF-8 for use in a query string.
#[must_use]
pub fn encode_address(address: &str) -> String {
    utf8_percent_encode(address, ADDRESS_ENCODE_SET).to_string()
}

/// Resolves `origin` through the gazetteer (zip) or the geocoder (address).
///
/// The zip branch never touches the network; the address branch never reads
/// the gazetteer.
///
/// # Errors
///
/// - [`LocateError::ZipNotFound`] when the zip has no exact gazetteer match.
/// - [`LocateError::GeocodingUnavailable`], [`LocateError::GeocodingNoMatch`],
///   or [`LocateError::GeocodingFailed`] from the address branch.
/// - [`LocateError::MalformedNumericField`] if either source returns
///   unparseable coordinate text.
pub async fn resolve_origin<Z, G>(
    origin: &OriginSpec,
    gazetteer: &Z,
    geocoder: &G,
) -> Result<Coordinate, LocateError>
where
    Z: Gazetteer + ?Sized,
    G: Geocoder,
{
    let coordinate = match origin {
        OriginSpec::Zip(zip) => gazetteer.lookup(zip)?,
        OriginSpec::Address(address) => {
            let encoded = encode_address(address);
            tracing::debug!(%encoded, "geocoding address");
            geocoder.geocode(&encoded).await?
        }
    };
    tracing::debug!(%coordinate, "origin resolved");
    Ok(coordinate)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use super::*;
    use crate::types::GazetteerRecord;

    /// Records every encoded address it is asked for and replies with a fixed result.
    struct FakeGeocoder {
        calls: AtomicUsize,
        last: Mutex<Option<String>>,
        reply: Option<Coordinate>,
    }

    impl FakeGeocoder {
        fn answering(reply: Option<Coordinate>) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                last: Mutex::new(None),
                reply,
            }
        }
    }

    impl Geocoder for FakeGeocoder {
        async fn geocode(&self, encoded_address: &str) -> Result<Coordinate, LocateError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last.lock().unwrap() = Some(encoded_address.to_string());
            self.reply.ok_or_else(|| LocateError::GeocodingNoMatch {
                address: encoded_address.to_string(),
            })
        }
    }

    /// Fails the test if the zip branch ever reaches for the table.
    struct UnreachableGazetteer;

    impl Gazetteer for UnreachableGazetteer {
        fn lookup(&self, zip: &str) -> Result<Coordinate, LocateError> {
            panic!("gazetteer consulted for address origin (zip {zip})");
        }
    }

    fn gazetteer() -> Vec<GazetteerRecord> {
        vec![GazetteerRecord {
            zip_code: "94111".to_string(),
            latitude: "37.79937".to_string(),
            longitude: "-122.398409".to_string(),
        }]
    }

    #[test]
    fn encode_address_escapes_spaces_and_commas() {
        assert_eq!(
            encode_address("1600 Pennsylvania Ave, Washington, DC"),
            "1600%20Pennsylvania%20Ave%2C%20Washington%2C%20DC"
        );
    }

    #[test]
    fn encode_address_keeps_unreserved_marks() {
        assert_eq!(encode_address("St.-Louis_Park*"), "St.-Louis_Park*");
    }

    #[test]
    fn encode_address_encodes_utf8_bytes() {
        assert_eq!(encode_address("Café"), "Caf%C3%A9");
    }

    #[tokio::test]
    async fn zip_origin_uses_gazetteer_without_network() {
        let geocoder = FakeGeocoder::answering(Some(Coordinate::new(0.0, 0.0)));
        let origin = OriginSpec::Zip("94111".to_string());

        let coord = resolve_origin(&origin, &gazetteer(), &geocoder)
            .await
            .unwrap();

        assert_eq!(coord, Coordinate::new(37.799_37, -122.398_409));
        assert_eq!(geocoder.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn unknown_zip_fails_not_found() {
        let geocoder = FakeGeocoder::answering(None);
        let origin = OriginSpec::Zip("12345".to_string());

        let err = resolve_origin(&origin, &gazetteer(), &geocoder)
            .await
            .unwrap_err();

        assert!(matches!(err, LocateError::ZipNotFound { .. }));
    }

    #[tokio::test]
    async fn address_origin_geocodes_encoded_text_once() {
        let expected = Coordinate::new(38.898_735, -77.038_025);
        let geocoder = FakeGeocoder::answering(Some(expected));
        let origin = OriginSpec::Address("1600 Pennsylvania Ave, Washington, DC".to_string());

        let coord = resolve_origin(&origin, &UnreachableGazetteer, &geocoder)
            .await
            .unwrap();

        assert_eq!(coord, expected);
        assert_eq!(geocoder.calls.load(Ordering::SeqCst), 1);
        assert_eq!(
            geocoder.last.lock().unwrap().as_deref(),
            Some("1600%20Pennsylvania%20Ave%2C%20Washington%2C%20DC")
        );
    }

    #[tokio::test]
    async fn address_without_match_propagates_no_match() {
        let geocoder = FakeGeocoder::answering(None);
        let origin = OriginSpec::Address("nowhere at all".to_string());

        let err = resolve_origin(&origin, &UnreachableGazetteer, &geocoder)
            .await
            .unwrap_err();

        assert!(matches!(err, LocateError::GeocodingNoMatch { .. }));
    }
}
