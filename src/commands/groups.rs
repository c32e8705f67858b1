//! `seqname groups` command.

use crate::generator::Generator;
use crate::options::GeneratorConfig;

/// Execute the `groups` command: one line per group with the width and
/// prefix its names are formatted with.
#[must_use]
pub fn run(config: GeneratorConfig) -> Vec<String> {
    let generator = Generator::with_options(config);

    generator
        .groups()
        .filter_map(|(name, _)| {
            let resolved = generator.resolved_options(name)?;
            Some(format!("{name}\tdigits={}\tprefix={:?}", resolved.digit_width, resolved.prefix))
        })
        .collect()
}
