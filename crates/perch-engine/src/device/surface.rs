pub(crate) fn choose_surface_format(
    formats: &[wgpu::TextureFormat],
    prefer_srgb: bool,
) -> Option<wgpu::TextureFormat> {
    if prefer_srgb {
        let preferred = [
            wgpu::TextureFormat::Bgra8UnormSrgb,
            wgpu::TextureFormat::Rgba8UnormSrgb,
        ];
        for f in preferred {
            if formats.contains(&f) {
                return Some(f);
            }
        }
    }

    formats.first().copied()
}

/// Picks a composite alpha mode.
///
/// Transparent windows need the compositor to honor framebuffer alpha, so a
/// premultiplied (then postmultiplied) mode is preferred. The cleared color
/// and fragment output are premultiplied.
pub(crate) fn choose_alpha_mode(
    supported: &[wgpu::CompositeAlphaMode],
    transparent: bool,
) -> wgpu::CompositeAlphaMode {
    let preferred: &[wgpu::CompositeAlphaMode] = if transparent {
        &[
            wgpu::CompositeAlphaMode::PreMultiplied,
            wgpu::CompositeAlphaMode::PostMultiplied,
            wgpu::CompositeAlphaMode::Inherit,
        ]
    } else {
        &[wgpu::CompositeAlphaMode::Opaque]
    };

    preferred
        .iter()
        .copied()
        .find(|m| supported.contains(m))
        .or_else(|| supported.first().copied())
        .unwrap_or(wgpu::CompositeAlphaMode::Auto)
}

/// Uses `requested` when supported; FIFO otherwise.
pub(crate) fn choose_present_mode(
    supported: &[wgpu::PresentMode],
    requested: wgpu::PresentMode,
) -> wgpu::PresentMode {
    if supported.contains(&requested) {
        requested
    } else {
        wgpu::PresentMode::Fifo
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wgpu::{CompositeAlphaMode as Alpha, PresentMode, TextureFormat};

    // ── format ────────────────────────────────────────────────────────────

    #[test]
    fn prefers_srgb_when_available() {
        let formats = [TextureFormat::Bgra8Unorm, TextureFormat::Bgra8UnormSrgb];
        assert_eq!(choose_surface_format(&formats, true), Some(TextureFormat::Bgra8UnormSrgb));
    }

    #[test]
    fn falls_back_to_first_format() {
        let formats = [TextureFormat::Rgba16Float, TextureFormat::Bgra8Unorm];
        assert_eq!(choose_surface_format(&formats, true), Some(TextureFormat::Rgba16Float));
        assert_eq!(choose_surface_format(&[], true), None);
    }

    // ── alpha ─────────────────────────────────────────────────────────────

    #[test]
    fn transparent_prefers_premultiplied() {
        let supported = [Alpha::Opaque, Alpha::PostMultiplied, Alpha::PreMultiplied];
        assert_eq!(choose_alpha_mode(&supported, true), Alpha::PreMultiplied);
    }

    #[test]
    fn transparent_settles_for_postmultiplied() {
        let supported = [Alpha::Opaque, Alpha::PostMultiplied];
        assert_eq!(choose_alpha_mode(&supported, true), Alpha::PostMultiplied);
    }

    #[test]
    fn opaque_window_uses_opaque_mode() {
        let supported = [Alpha::PreMultiplied, Alpha::Opaque];
        assert_eq!(choose_alpha_mode(&supported, false), Alpha::Opaque);
    }

    #[test]
    fn unsupported_preference_falls_back_to_first_supported() {
        assert_eq!(choose_alpha_mode(&[Alpha::Inherit], false), Alpha::Inherit);
        assert_eq!(choose_alpha_mode(&[], true), Alpha::Auto);
    }

    // ── present mode ──────────────────────────────────────────────────────

    #[test]
    fn unsupported_present_mode_falls_back_to_fifo() {
        let supported = [PresentMode::Fifo, PresentMode::Immediate];
        assert_eq!(choose_present_mode(&supported, PresentMode::Mailbox), PresentMode::Fifo);
        assert_eq!(
            choose_present_mode(&supported, PresentMode::Immediate),
            PresentMode::Immediate
        );
    }
}
