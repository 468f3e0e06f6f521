//! Prompt builders for copy generation and image compositing

use pagecraft_core::{ProjectInfo, SectionType};

/// Natural-language instruction for generating one section's copy.
///
/// Embeds the product metadata and the per-type guideline; the JSON
/// constraint itself travels in the request's generation config, but the
/// instruction repeats it since models follow explicit asks more reliably.
pub fn copy_prompt(info: &ProjectInfo, section_type: SectionType) -> String {
    format!(
        "Write product detail page copy optimized for e-commerce storefronts.\n\
         \n\
         Product name: {name}\n\
         Product description: {desc}\n\
         Target audience: {audience}\n\
         Tone of voice: {tone}\n\
         Section kind: {kind}\n\
         \n\
         Guideline for this section:\n\
         - {guideline}\n\
         \n\
         Return a JSON object with exactly the string fields \"title\" and \
         \"content\". For Features, put one selling point per line in \
         \"content\".",
        name = info.product_name,
        desc = info.product_desc,
        audience = info.target_audience,
        tone = info.tone,
        kind = section_type.name(),
        guideline = section_type.guideline(),
    )
}

/// Instruction for the image model: background removal when only the
/// product shot is supplied, compositing when a background is too.
pub fn composite_prompt(has_background: bool) -> &'static str {
    if has_background {
        "Composite the product from the first image onto the background from \
         the second image. Adjust shadows and lighting so the result looks \
         like a professional studio photograph."
    } else {
        "Remove the background from this product photo and place the product \
         on a clean, professional studio-white backdrop with a natural soft \
         shadow."
    }
}
