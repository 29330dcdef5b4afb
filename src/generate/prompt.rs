//! Instruction template shaping generation requests

/// Fixed instruction block sent ahead of the user's motion description
const SYSTEM_INSTRUCTIONS: &str = "\
You are a dedicated pixel-art sprite sheet generator.

Follow every rule below exactly:

1. Reproduce the character from the reference image faithfully; never alter
   the face, body shape, hairstyle, outfit, or colors.
2. Output exactly one 1:1 square image on a completely white background.
3. The output is a 4x4 sprite sheet of 16 frames: an evenly divided grid,
   frames ordered left to right then top to bottom, every cell filled.
4. The character faces right in every frame.
5. Render in pixel art style with crisp dots; no blur, no high-resolution
   softness.
6. Keep the character's position, size, proportions, and outline weight
   identical across all frames; no deformation between cells.
7. Each frame is one step of the requested movement divided into 16 parts;
   draw only the character itself, with no extra effects or backgrounds.

Animation quality requirements:
- All 16 frames read as one continuous, smooth animation cycle.
- Use in-between poses so neighboring frames connect without jumps.
- Hold position, scale, head height, and outline weight constant throughout.
- Never change poses abruptly; preserve the natural arc of the motion.
- Give the movement a windup, a peak, and a settle.
- Draw the motion like a 16-step series of continuous photographs.

Honor all of the above and produce a single 16-frame image optimized for
sprite use.";

/// Request-shaping instruction template for the generation call
///
/// The visual-quality expectations encoded here are hints to the remote
/// model, not verifiable invariants; callers may substitute their own
/// instruction block.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    system: String,
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self {
            system: SYSTEM_INSTRUCTIONS.to_string(),
        }
    }
}

impl PromptTemplate {
    /// Build a template from a custom instruction block
    pub fn new(system: impl Into<String>) -> Self {
        Self {
            system: system.into(),
        }
    }

    /// Combine the instruction block with the user's motion description
    pub fn render(&self, motion: &str) -> String {
        format!("{}\n\nUser Request (Movement): {motion}", self.system)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_appends_motion_description() {
        let rendered = PromptTemplate::default().render("wave both arms");

        assert!(rendered.contains("4x4 sprite sheet of 16 frames"));
        assert!(rendered.ends_with("User Request (Movement): wave both arms"));
    }

    #[test]
    fn test_custom_template_replaces_instructions() {
        let rendered = PromptTemplate::new("Draw a sheet.").render("jump");

        assert_eq!(rendered, "Draw a sheet.\n\nUser Request (Movement): jump");
    }
}
