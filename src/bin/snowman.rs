// command line options
use clap::Parser;
// others
use anyhow::{bail, Context};
use log::info;
use rayon::prelude::*;
// pbrt
use rs_pbrt_snowman::core::api::make_shape;
use rs_pbrt_snowman::core::geometry::{Bounds3f, Point2f, Point3f, Ray, Vector3f};
use rs_pbrt_snowman::core::interaction::SurfaceInteraction;
use rs_pbrt_snowman::core::paramset::ParamSet;
use rs_pbrt_snowman::core::pbrt::Float;
use rs_pbrt_snowman::core::shape::Shape;
use rs_pbrt_snowman::core::transform::Transform;
// std
use std::path::PathBuf;
use std::str::FromStr;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const BACKGROUND: [u8; 3] = [70, 110, 170];

/// Cast an orthographic grid of rays at a shape and write an image
/// with one flat colour per hit part.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// width and height of the image in pixels
    #[arg(short = 'r', long = "resolution", default_value_t = 256)]
    resolution: u32,
    /// use specified number of threads for tracing
    #[arg(short = 't', long = "nthreads", default_value_t = 0)]
    nthreads: u8,
    /// the image to write
    #[arg(short = 'o', long = "output", default_value = "snowman.png")]
    output: PathBuf,
    /// registered shape name
    #[arg(short = 's', long = "shape", default_value = "snowman")]
    shape: String,
    /// shape parameter, either name=float or name=x,y,z
    #[arg(short = 'p', long = "param")]
    params: Vec<String>,
    /// draw this many area samples from the shape
    #[arg(long = "samples", default_value_t = 0)]
    samples: u32,
    /// rotate the shape around the z axis (degrees)
    #[arg(long = "rotate", default_value_t = 0.0)]
    rotate: Float,
}

fn parse_param(params: &mut ParamSet, arg: &str) -> anyhow::Result<()> {
    let (name, value) = match arg.split_once('=') {
        Some(pair) => pair,
        None => bail!("parameter {:?} is not of the form name=value", arg),
    };
    let floats: Vec<Float> = value
        .split(',')
        .map(|s| Float::from_str(s.trim()))
        .collect::<Result<Vec<Float>, _>>()
        .with_context(|| format!("parameter {:?} has non-numeric values", name))?;
    match floats.len() {
        1 => params.add_float(name.to_string(), floats[0]),
        3 => params.add_point3f(
            name.to_string(),
            Point3f {
                x: floats[0],
                y: floats[1],
                z: floats[2],
            },
        ),
        n => bail!("parameter {:?} has {} values, expected 1 or 3", name, n),
    }
    Ok(())
}

fn part_colour(isect: &SurfaceInteraction) -> [u8; 3] {
    match isect.part_id {
        Some(0) => [245, 245, 245],
        Some(1) => [200, 200, 200],
        Some(2) => [255, 140, 0],
        Some(3) => [60, 60, 60],
        _ => [220, 220, 220],
    }
}

fn render(shape: &Shape, resolution: u32) -> Vec<u8> {
    // frame the world bound, looking along +y
    let b: Bounds3f = shape.world_bound();
    let extent: Float = (b.p_max.x - b.p_min.x).max(b.p_max.z - b.p_min.z);
    let center_x: Float = 0.5 * (b.p_min.x + b.p_max.x);
    let center_z: Float = 0.5 * (b.p_min.z + b.p_max.z);
    let pixel_size: Float = extent / resolution as Float;
    let width: usize = resolution as usize;
    let mut buffer: Vec<u8> = vec![0_u8; 3 * width * width];
    buffer
        .par_chunks_mut(3 * width)
        .enumerate()
        .for_each(|(row, pixels)| {
            let z: Float = center_z + 0.5 * extent - (row as Float + 0.5) * pixel_size;
            for (column, pixel) in pixels.chunks_exact_mut(3).enumerate() {
                let x: Float = center_x - 0.5 * extent + (column as Float + 0.5) * pixel_size;
                let ray: Ray = Ray::new(
                    Point3f {
                        x,
                        y: b.p_min.y - 1.0,
                        z,
                    },
                    Vector3f {
                        x: 0.0,
                        y: 1.0,
                        z: 0.0,
                    },
                );
                let mut t_hit: Float = 0.0;
                let mut isect: SurfaceInteraction = SurfaceInteraction::default();
                let colour: [u8; 3] = if shape.intersect(&ray, &mut t_hit, &mut isect, true) {
                    part_colour(&isect)
                } else {
                    BACKGROUND
                };
                pixel.copy_from_slice(&colour);
            }
        });
    buffer
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    // handle command line options
    let args = Cli::parse();
    info!("snowman version {}", VERSION);
    if args.nthreads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(args.nthreads as usize)
            .build_global()
            .context("could not configure the thread pool")?;
    }
    info!("Rendering with {} thread(s) ...", rayon::current_num_threads());
    let mut params: ParamSet = ParamSet::default();
    for arg in args.params.iter() {
        parse_param(&mut params, arg)?;
    }
    let object_to_world: Transform = Transform::rotate_z(args.rotate);
    let world_to_object: Transform = Transform::inverse(&object_to_world);
    let shape: Shape = make_shape(
        &args.shape,
        &object_to_world,
        &world_to_object,
        false,
        &params,
    )?;
    info!("{:?} with surface area {}", args.shape, shape.area());
    if args.samples > 0 {
        let mut centroid: Vector3f = Vector3f::default();
        for i in 0..args.samples {
            let u: Point2f = Point2f {
                x: (i as Float + 0.5) / args.samples as Float,
                y: ((i * 7) % args.samples) as Float / args.samples as Float,
            };
            let mut pdf: Float = 0.0;
            // area sampling failures are fatal
            let it = shape.sample(u, &mut pdf)?;
            centroid = centroid + Vector3f::from(it.p) / args.samples as Float;
        }
        info!("centroid of {} area samples: {:?}", args.samples, centroid);
    }
    let buffer: Vec<u8> = render(&shape, args.resolution);
    image::save_buffer(
        &args.output,
        &buffer,
        args.resolution,
        args.resolution,
        image::ColorType::Rgb8,
    )
    .with_context(|| format!("could not write {:?}", args.output))?;
    info!("Writing image {:?} done", args.output);
    if let Shape::SnwMn(snowman) = &shape {
        snowman.report_stats();
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn params_are_floats_or_points() {
        let mut params: ParamSet = ParamSet::default();
        parse_param(&mut params, "radiusHead=0.75").unwrap();
        parse_param(&mut params, "posHat=0, 0.5, 2.5").unwrap();
        assert_eq!(params.find_one_float("radiusHead", 0.0), 0.75);
        assert_eq!(
            params.find_one_point3f("posHat", Point3f::default()),
            Point3f {
                x: 0.0,
                y: 0.5,
                z: 2.5,
            }
        );
        assert!(parse_param(&mut params, "radiusHead").is_err());
        assert!(parse_param(&mut params, "posHat=1,2").is_err());
        assert!(parse_param(&mut params, "radiusHat=big").is_err());
    }

    #[test]
    fn renders_every_part() {
        let identity: Transform = Transform::default();
        let shape: Shape =
            make_shape("snowman", &identity, &identity, false, &ParamSet::default()).unwrap();
        let buffer: Vec<u8> = render(&shape, 64);
        assert_eq!(buffer.len(), 3 * 64 * 64);
        let pixels: Vec<&[u8]> = buffer.chunks_exact(3).collect();
        for colour in [[245, 245, 245], [200, 200, 200], [255, 140, 0], [60, 60, 60]].iter() {
            assert!(pixels.iter().any(|p| *p == &colour[..]));
        }
        assert!(pixels.iter().any(|p| *p == &BACKGROUND[..]));
    }
}
