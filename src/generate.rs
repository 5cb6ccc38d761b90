//! XML descriptor generation.
//!
//! Renders the two documents GNOME reads from its background directories.
//! Generation is pure string assembly with no I/O, and the finished document
//! is trimmed of surrounding whitespace.
//!
//! ## Wallpaper List
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <!DOCTYPE wallpapers SYSTEM "gnome-wp-list.dtd">
//! <wallpapers>
//!  <wallpaper>
//!       <name>dawn</name>
//!       <filename>/home/me/photos/dawn.jpg</filename>
//!       <options>zoom</options>
//!       <pcolor>#000000</pcolor>
//!       <scolor>#000000</scolor>
//!       <shade_type>solid</shade_type>
//!  </wallpaper>
//! </wallpapers>
//! ```
//!
//! ## Slideshow
//!
//! A `<background>` with a fixed start time (midnight, 2009-08-04) followed
//! by one `<static>` + `<transition>` pair per image. For image `i` the pair
//! shows image `i - 1` and then fades from it to image `i`, wrapping so the
//! first pair starts from the last image. Every image is thus faded from
//! exactly once and faded to exactly once, and the loop closes on itself.
//!
//! ## Escaping
//!
//! File names and paths are escaped (`&`, `<`, `>`, `"`, `'`) so any name
//! the filesystem allows still yields a well-formed document.

use crate::config::WallpapersConfig;
use crate::naming;
use crate::timing::SlideshowTiming;
use crate::types::ImageEntry;
use rand::Rng;
use std::fmt::Write;

const WALLPAPERS_HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE wallpapers SYSTEM "gnome-wp-list.dtd">
<wallpapers>"#;

const BACKGROUND_HEADER: &str = "<background>
  <starttime>
    <year>2009</year>
    <month>08</month>
    <day>04</day>
    <hour>00</hour>
    <minute>00</minute>
    <second>00</second>
  </starttime>
<!-- This animation will start at midnight. -->";

/// Escape XML special characters in text and attribute content.
pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn path_text(image: &ImageEntry) -> String {
    escape_xml(&image.path.to_string_lossy())
}

/// Render a `<wallpapers>` list with one `<wallpaper>` block per image.
pub fn wallpapers_document(images: &[ImageEntry], style: &WallpapersConfig) -> String {
    let mut body = String::new();
    for image in images {
        // Writing into a String cannot fail.
        let _ = write!(
            body,
            "
 <wallpaper>
      <name>{name}</name>
      <filename>{filename}</filename>
      <options>{options}</options>
      <pcolor>{pcolor}</pcolor>
      <scolor>{scolor}</scolor>
      <shade_type>{shade_type}</shade_type>
 </wallpaper>",
            name = escape_xml(naming::strip_extension(&image.file_name)),
            filename = path_text(image),
            options = escape_xml(&style.options),
            pcolor = escape_xml(&style.pcolor),
            scolor = escape_xml(&style.scolor),
            shade_type = escape_xml(&style.shade_type),
        );
    }
    format!("{WALLPAPERS_HEADER}{body}\n</wallpapers>")
        .trim()
        .to_string()
}

/// Render a `<background>` slideshow cycling through `images` in order.
///
/// One duration is drawn from `timing.policy` per `<static>` tag.
pub fn slideshow_document<R: Rng>(
    images: &[ImageEntry],
    timing: &SlideshowTiming,
    rng: &mut R,
) -> String {
    let mut body = String::new();
    let count = images.len();
    for (i, current) in images.iter().enumerate() {
        let previous = &images[(i + count - 1) % count];
        let from = path_text(previous);
        let _ = write!(
            body,
            "
  <static>
    <duration>{duration:.2}</duration>
    <file>{from}</file>
  </static>
  <transition>
    <duration>{transition:.2}</duration>
    <from>{from}</from>
    <to>{to}</to>
  </transition>",
            duration = timing.policy.next_duration(rng),
            transition = timing.transition,
            to = path_text(current),
        );
    }
    format!("{BACKGROUND_HEADER}{body}\n</background>")
        .trim()
        .to_string()
}
