#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(not(feature = "std"))]
use alloc::string::String;

use crate::error::Result;
use crate::fields::Fields;
use crate::traits::Serialize;
use crate::writer::WriterOptions;

/// A type that declares JSON fields from an argument of type `Args`.
///
/// `Args` is whatever shape the implementor wants callers to pass: a tuple
/// of positional values, or a struct when some of them are optional. One
/// type may implement `Serializer` for several argument shapes.
///
/// [`Serialize`](crate::Serialize) also has a `serialize` method. A type
/// implementing both traits must call them with the trait path, e.g.
/// `Serializer::serialize(&value, &mut fields, args)`.
///
/// ```
/// use to_json::{Fields, Serializer};
///
/// #[derive(Default)]
/// struct Point;
///
/// impl Serializer<(i32, i32)> for Point {
///     fn serialize(&self, fields: &mut Fields, (x, y): (i32, i32)) {
///         fields.put("x", x).put("y", y);
///     }
/// }
///
/// assert_eq!(Point.json((1, 2)).unwrap(), "{\"x\":1,\"y\":2}\n");
/// assert_eq!(Point::json_new((1, 2)).unwrap(), "{\"x\":1,\"y\":2}\n");
/// ```
pub trait Serializer<Args> {
    fn serialize(&self, fields: &mut Fields, args: Args);

    /// Collect the declared fields without rendering them.
    fn to_json_data(&self, args: Args) -> Fields {
        let mut fields = Fields::new();
        self.serialize(&mut fields, args);
        fields
    }

    /// Render compact JSON followed by a newline.
    fn json(&self, args: Args) -> Result<String> {
        self.json_with_options(args, &WriterOptions::default())
    }

    fn json_with_options(&self, args: Args, options: &WriterOptions) -> Result<String> {
        let fields = self.to_json_data(args);
        let text = String::from_utf8(fields.serialize_with_options(options)?)?;
        tracing::debug!(fields = fields.len(), bytes = text.len(), "rendered json");
        Ok(text)
    }

    /// Render from a freshly constructed serializer.
    fn json_new(args: Args) -> Result<String>
    where
        Self: Default + Sized,
    {
        Self::default().json(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::writer::WriterContext;
    use crate::VERSION;

    const EXPECTED: &str = "{\"controller\":\"controller\",\"station\":\"station\",\"timestamps\":[\"timestamps\"],\"media_type_scope\":\"media_files\"}\n";

    #[derive(Default)]
    struct Subject;

    impl<'a> Serializer<(&'a str, &'a str, Vec<&'a str>, Option<&'a str>)> for Subject {
        fn serialize(
            &self,
            fields: &mut Fields,
            (controller, station, timestamps, media_type_scope): (
                &'a str,
                &'a str,
                Vec<&'a str>,
                Option<&'a str>,
            ),
        ) {
            fields
                .put("controller", controller)
                .put("station", station)
                .put("timestamps", timestamps)
                .put("media_type_scope", media_type_scope.unwrap_or("default"));
        }
    }

    #[test]
    fn it_has_a_version_number() {
        assert!(!VERSION.is_empty());
        assert_eq!(VERSION, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn it_renders_from_instance() {
        let json = Subject
            .json((
                "controller",
                "station",
                vec!["timestamps"],
                Some("media_files"),
            ))
            .unwrap();
        assert_eq!(json, EXPECTED);
    }

    #[test]
    fn it_renders_from_type() {
        let json = Subject::json_new((
            "controller",
            "station",
            vec!["timestamps"],
            Some("media_files"),
        ))
        .unwrap();
        assert_eq!(json, EXPECTED);
    }

    #[test]
    fn it_defaults_media_type_scope() {
        let json = Subject::json_new(("c", "s", vec![], None)).unwrap();
        assert_eq!(
            json,
            "{\"controller\":\"c\",\"station\":\"s\",\"timestamps\":[],\"media_type_scope\":\"default\"}\n"
        );
    }

    #[test]
    fn it_is_idempotent() {
        let args = || ("controller", "station", vec!["timestamps"], Some("media_files"));
        assert_eq!(Subject.json(args()).unwrap(), Subject.json(args()).unwrap());
        assert_eq!(Subject.json(args()).unwrap(), Subject::json_new(args()).unwrap());
    }

    struct Overwriting;

    impl Serializer<()> for Overwriting {
        fn serialize(&self, fields: &mut Fields, _: ()) {
            fields.put("x", 1).put("y", 0).put("x", 2);
        }
    }

    #[test]
    fn it_keeps_last_write() {
        assert_eq!(Overwriting.json(()).unwrap(), "{\"x\":2,\"y\":0}\n");
    }

    struct Reading;

    impl Serializer<f64> for Reading {
        fn serialize(&self, fields: &mut Fields, value: f64) {
            fields.put("station", "KEXP").put("value", value);
        }
    }

    #[test]
    fn it_fails_on_unserializable_value_at_render_time() {
        let fields = Reading.to_json_data(f64::NAN);
        assert_eq!(fields.len(), 2);
        match Reading.json(f64::NAN) {
            Err(Error::NonFiniteNumber { value }) => assert!(value.is_nan()),
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(
            Reading.json(1.25).unwrap(),
            "{\"station\":\"KEXP\",\"value\":1.25}\n"
        );
    }

    struct Playlist;

    impl<'a, 'b> Serializer<&'a [&'b str]> for Playlist {
        fn serialize(&self, fields: &mut Fields, tracks: &'a [&'b str]) {
            fields.put("count", tracks.len()).put_array("tracks", |arr| {
                for track in tracks {
                    arr.push(*track);
                }
            });
        }
    }

    #[test]
    fn it_nests_other_serializers() {
        struct Show;

        impl<'a> Serializer<(&'a str, &'a [&'a str])> for Show {
            fn serialize(&self, fields: &mut Fields, (name, tracks): (&'a str, &'a [&'a str])) {
                fields
                    .put("name", name)
                    .put_serializer("playlist", &Playlist, tracks);
            }
        }

        assert_eq!(
            Show.json(("Morning", &["a", "b"][..])).unwrap(),
            "{\"name\":\"Morning\",\"playlist\":{\"count\":2,\"tracks\":[\"a\",\"b\"]}}\n"
        );
    }

    #[derive(Default)]
    struct Both;

    impl Serializer<u8> for Both {
        fn serialize(&self, fields: &mut Fields, level: u8) {
            fields.put("level", level);
        }
    }

    impl Serialize for Both {
        fn serialize_to(&self, buffer: &mut Vec<u8>, context: &WriterContext) -> Result<()> {
            self.to_json_data(0).serialize_to(buffer, context)
        }
    }

    #[test]
    fn it_disambiguates_both_serialize_methods() {
        let mut fields = Fields::new();
        Serializer::serialize(&Both, &mut fields, 3);
        assert_eq!(fields.len(), 1);
        assert_eq!(
            Serialize::serialize(&Both).unwrap(),
            b"{\"level\":0}\n".to_vec()
        );
        assert_eq!(Both::json_new(3).unwrap(), "{\"level\":3}\n");
    }

    #[test]
    fn it_rejects_oversized_indent() {
        let options = WriterOptions {
            indent: u32::MAX,
            ..Default::default()
        };
        assert_eq!(
            Overwriting.json_with_options((), &options),
            Err(Error::InvalidIndent { indent: u32::MAX })
        );
    }

    #[test]
    fn it_renders_f32_fields() {
        struct Gain;

        impl Serializer<f32> for Gain {
            fn serialize(&self, fields: &mut Fields, value: f32) {
                fields.put("v", value);
            }
        }

        assert_eq!(Gain.json(0.1f32).unwrap(), "{\"v\":0.1}\n");
    }

    #[test]
    fn it_renders_with_options() {
        let options = WriterOptions {
            indent: 2,
            trailing_newline: false,
            ..Default::default()
        };
        assert_eq!(
            Overwriting.json_with_options((), &options).unwrap(),
            "{\n  \"x\": 2,\n  \"y\": 0\n}"
        );

        let options = WriterOptions {
            max_nest_level: Some(1),
            ..Default::default()
        };
        assert_eq!(
            Playlist.json_with_options(&["a"][..], &options),
            Err(Error::ExceededNestLevel { level: 1 })
        );
    }
}
