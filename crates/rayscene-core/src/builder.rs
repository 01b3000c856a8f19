//! Scene document builder
//!
//! [`SceneBuilder`] writes a scene file section by section through a
//! [`TagWriter`]. Sections only move forward:
//!
//! ```text
//! Start -> Image -> Camera -> Lights -> Shaders -> Surfaces -> Closed
//! ```
//!
//! Any section may be skipped, lights, shaders and surfaces may repeat,
//! and stepping back is an [`Error::SectionOrder`]. Every container the
//! builder opens is closed in the same call, so the document stays well
//! formed whatever the caller does.

use crate::palette::ShaderPalette;
use crate::scene::{Camera, Image, Light, Shader, Surface};
use crate::value::Value;
use crate::writer::{Tag, TagWriter};
use crate::{Error, Result};
use std::io::Write;

/// Document sections, in the order they must appear
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Section {
    Start,
    Image,
    Camera,
    Lights,
    Shaders,
    Surfaces,
    Closed,
}

impl Section {
    fn repeatable(self) -> bool {
        matches!(self, Self::Lights | Self::Shaders | Self::Surfaces)
    }
}

/// Counts of what a builder has written
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SceneStats {
    pub lights: usize,
    pub shaders: usize,
    pub surfaces: usize,
}

/// Writes a scene document through a [`TagWriter`]
pub struct SceneBuilder<W: Write> {
    writer: TagWriter<W>,
    section: Section,
    stats: SceneStats,
}

impl<W: Write> SceneBuilder<W> {
    /// Write the preamble and open `<scene>`
    pub fn begin(sink: W) -> Result<Self> {
        let mut writer = TagWriter::new(sink);
        writer.write_preamble()?;
        writer.write_tag(&Tag::open("scene"))?;
        Ok(Self {
            writer,
            section: Section::Start,
            stats: SceneStats::default(),
        })
    }

    /// Output resolution
    pub fn image(&mut self, image: &Image) -> Result<()> {
        self.enter(Section::Image)?;
        self.writer.write_leaf_group(image.fields(), 1)
    }

    pub fn camera(&mut self, camera: &Camera) -> Result<()> {
        self.enter(Section::Camera)?;
        self.container("camera", &[], camera.fields())
    }

    pub fn light(&mut self, light: &Light) -> Result<()> {
        self.enter(Section::Lights)?;
        self.container("light", &[], light.fields())?;
        self.stats.lights += 1;
        Ok(())
    }

    /// Declare one shader
    pub fn shader(&mut self, shader: &Shader) -> Result<()> {
        self.enter(Section::Shaders)?;
        self.container(
            "shader",
            &[
                ("name", shader.name.as_str()),
                ("type", shader.kind.type_name()),
            ],
            shader.fields(),
        )?;
        self.stats.shaders += 1;
        Ok(())
    }

    /// Declare every shader of a palette, in declaration order
    pub fn palette(&mut self, palette: &ShaderPalette) -> Result<()> {
        self.enter(Section::Shaders)?;
        for shader in palette.iter() {
            self.shader(shader)?;
        }
        Ok(())
    }

    /// A primitive with its inline shader reference
    pub fn surface(&mut self, surface: &Surface) -> Result<()> {
        self.enter(Section::Surfaces)?;
        self.writer.write_tag(
            &Tag::open("surface")
                .on_new_line()
                .depth(1)
                .attr("type", surface.shape.kind().as_str()),
        )?;
        self.writer.write_tag(
            &Tag::open("shader")
                .on_new_line()
                .inline()
                .depth(2)
                .attr("ref", surface.shader.name()),
        )?;
        self.writer.write_leaf_group(surface.shape.fields(), 2)?;
        self.writer.write_tag(&Tag::close("surface").depth(1))?;
        self.stats.surfaces += 1;
        Ok(())
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn stats(&self) -> SceneStats {
        self.stats
    }

    /// Close `</scene>` and the writer, returning the flushed sink
    pub fn finish(mut self) -> Result<W> {
        self.enter(Section::Closed)?;
        self.writer.write_tag(&Tag::close("scene").on_new_line())?;
        self.writer.close()
    }

    fn enter(&mut self, next: Section) -> Result<()> {
        let ok = next > self.section || (next == self.section && next.repeatable());
        if !ok {
            return Err(Error::SectionOrder {
                current: self.section,
                next,
            });
        }
        if next != self.section {
            tracing::debug!("Entering {:?} section", next);
        }
        self.section = next;
        Ok(())
    }

    /// `<name attrs>` + leaves + `</name>` at depth 1
    fn container<I>(&mut self, name: &str, attributes: &[(&str, &str)], fields: I) -> Result<()>
    where
        I: IntoIterator<Item = (&'static str, Value)>,
    {
        let mut open = Tag::open(name).on_new_line().depth(1);
        for &(key, value) in attributes {
            open = open.attr(key, value);
        }
        self.writer.write_tag(&open)?;
        self.writer.write_leaf_group(fields, 2)?;
        self.writer.write_tag(&Tag::close(name).depth(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Shape;
    use glam::DVec3;

    fn camera() -> Camera {
        Camera {
            view_point: DVec3::new(10.0, 4.8, 6.0),
            view_dir: DVec3::new(-5.0, -2.4, -3.0),
            proj_normal: DVec3::new(5.0, 2.4, 3.0),
            view_up: DVec3::Y,
            proj_distance: 6.0,
            view_width: 4.0,
            view_height: 2.25,
        }
    }

    fn text(bytes: Vec<u8>) -> String {
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_empty_scene() {
        let builder = SceneBuilder::begin(Vec::new()).unwrap();
        let out = text(builder.finish().unwrap());
        assert_eq!(
            out,
            "<?xml version=\"1.0\" encoding=\"UTF-8\" ?>\n<scene>\n</scene>\n"
        );
    }

    #[test]
    fn test_prologue_layout() {
        let mut builder = SceneBuilder::begin(Vec::new()).unwrap();
        builder.image(&Image::new(800, 600)).unwrap();
        builder
            .light(&Light::new(DVec3::new(4.0, 5.0, -3.0), DVec3::ONE))
            .unwrap();
        let out = text(builder.finish().unwrap());
        let expected = concat!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\" ?>\n",
            "<scene>\n",
            "  <image>800 600</image>\n",
            "\n",
            "  <light>\n",
            "    <position>4 5 -3</position>\n",
            "    <intensity>1 1 1</intensity>\n",
            "  </light>\n",
            "</scene>\n",
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn test_camera_block() {
        let mut builder = SceneBuilder::begin(Vec::new()).unwrap();
        builder.camera(&camera()).unwrap();
        let out = text(builder.finish().unwrap());
        assert!(out.contains("\n  <camera>\n    <viewPoint>10 4.8 6</viewPoint>\n"));
        assert!(out.contains("    <viewHeight>2.25</viewHeight>\n  </camera>"));
        assert_eq!(out.matches("</camera>").count(), 1);
    }

    #[test]
    fn test_shader_declaration() {
        let mut builder = SceneBuilder::begin(Vec::new()).unwrap();
        builder
            .shader(&Shader::lambertian("cone", DVec3::new(1.0, 1.0, 0.8)))
            .unwrap();
        let out = text(builder.finish().unwrap());
        assert!(out.contains(
            "\n  <shader name=\"cone\" type=\"Lambertian\">\n    <diffuseColor>1 1 0.8</diffuseColor>\n  </shader>"
        ));
    }

    #[test]
    fn test_surface_block() {
        let mut palette = ShaderPalette::new();
        let blue = palette
            .add(Shader::phong(
                "blue",
                DVec3::new(0.2, 0.3, 0.8),
                DVec3::new(1.0, 1.0, 0.0),
                10.0,
            ))
            .unwrap();

        let mut builder = SceneBuilder::begin(Vec::new()).unwrap();
        builder.palette(&palette).unwrap();
        builder
            .surface(&Surface::new(
                blue,
                Shape::Sphere {
                    center: DVec3::new(0.0, 0.0, 2.5),
                    radius: 2.5,
                },
            ))
            .unwrap();
        assert_eq!(
            builder.stats(),
            SceneStats {
                lights: 0,
                shaders: 1,
                surfaces: 1
            }
        );
        let out = text(builder.finish().unwrap());
        let expected = concat!(
            "\n  <surface type=\"Sphere\">",
            "\n    <shader ref=\"blue\" />",
            "\n    <center>0 0 2.5</center>",
            "\n    <radius>2.5</radius>\n",
            "  </surface>",
            "\n</scene>\n",
        );
        assert!(out.ends_with(expected), "unexpected output:\n{out}");
    }

    #[test]
    fn test_sections_only_move_forward() {
        let mut builder = SceneBuilder::begin(Vec::new()).unwrap();
        builder.image(&Image::default()).unwrap();
        builder.light(&Light::new(DVec3::ZERO, DVec3::ONE)).unwrap();

        let err = builder.camera(&camera()).unwrap_err();
        assert!(matches!(
            err,
            Error::SectionOrder {
                current: Section::Lights,
                next: Section::Camera
            }
        ));
        // A rejected call writes nothing and keeps the cursor
        assert_eq!(builder.section(), Section::Lights);
        builder.light(&Light::new(DVec3::ONE, DVec3::ONE)).unwrap();
    }

    #[test]
    fn test_image_is_written_once() {
        let mut builder = SceneBuilder::begin(Vec::new()).unwrap();
        builder.image(&Image::default()).unwrap();
        assert!(builder.image(&Image::default()).is_err());
    }
}
