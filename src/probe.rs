//! Camera probe
//!
//! Places a camera from [`AppConfig`], then reports for each configured
//! world point where it lands on screen, how far in front of the camera it
//! is and where the sight line from the camera to it crosses the ground.

use std::fmt;

use gamemath_math::{deg_to_rad, Mat4, Mat4f, Plane, Vec2f, Vec3, Vec3f};

use crate::config::{AppConfig, CameraConfig, ProjectionConfig, ProjectionKind};

/// World transform of the camera: translate, then yaw, pitch and roll
pub fn camera_transform(camera: &CameraConfig) -> Mat4f {
    let [pitch, yaw, roll] = camera.rotation;
    Mat4::translation(Vec3::from(camera.position))
        * Mat4::euler_rotation_y(deg_to_rad(yaw))
        * Mat4::euler_rotation_x(deg_to_rad(pitch))
        * Mat4::euler_rotation_z(deg_to_rad(roll))
}

/// Projection matrix for the configured kind
pub fn projection_matrix(projection: &ProjectionConfig) -> Mat4f {
    let p = projection;
    match p.kind {
        ProjectionKind::Perspective => Mat4::perspective_fov(p.fov, p.aspect, p.near, p.far),
        ProjectionKind::Orthographic => {
            Mat4::ortho(p.ortho_height * p.aspect, p.ortho_height, p.near, p.far)
        }
    }
}

/// Error building a [`Probe`]
#[derive(Debug, Clone, PartialEq)]
pub enum ProbeError {
    /// Clip planes that give a degenerate projection
    InvalidClipPlanes { near: f32, far: f32 },
    /// Ground plane with a zero normal
    DegenerateGround([f32; 4]),
}

impl fmt::Display for ProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeError::InvalidClipPlanes { near, far } => {
                write!(f, "Invalid clip planes: near {} far {}", near, far)
            }
            ProbeError::DegenerateGround(coefficients) => {
                write!(f, "Ground plane {:?} has no normal", coefficients)
            }
        }
    }
}

impl std::error::Error for ProbeError {}

/// Result of probing one point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeSample {
    /// World-space point
    pub point: Vec3f,
    /// Normalized device coordinates
    pub ndc: Vec3f,
    /// Distance in front of the camera along its view axis
    pub depth: f32,
    /// In front of the camera and inside the view volume
    pub on_screen: bool,
    /// Pitch and yaw of the direction from the camera to the point, degrees
    pub heading: Vec2f,
    /// Where the camera-to-point segment crosses the ground
    pub ground_hit: Option<Vec3f>,
}

impl fmt::Display for ProbeSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> ndc {} depth {:.3} {} heading {}",
            self.point,
            self.ndc,
            self.depth,
            if self.on_screen { "visible" } else { "hidden" },
            self.heading,
        )?;
        match self.ground_hit {
            Some(hit) => write!(f, " ground {}", hit),
            None => write!(f, " ground -"),
        }
    }
}

/// A placed camera plus the points to probe
#[derive(Debug, Clone)]
pub struct Probe {
    eye: Vec3f,
    view: Mat4f,
    view_projection: Mat4f,
    ground: Plane,
    points: Vec<String>,
    separator: String,
}

impl Probe {
    /// Build view and projection from `config`
    pub fn new(config: &AppConfig) -> Result<Self, ProbeError> {
        let projection = &config.projection;
        let (near, far) = (projection.near, projection.far);
        let perspective = projection.kind == ProjectionKind::Perspective;
        if near == far || (perspective && near <= 0.0) {
            return Err(ProbeError::InvalidClipPlanes { near, far });
        }

        let [a, b, c, d] = config.probe.ground;
        let ground = Plane::from_coefficients(a, b, c, d);
        if ground.normal == Vec3f::zero() {
            return Err(ProbeError::DegenerateGround(config.probe.ground));
        }

        let camera = camera_transform(&config.camera);
        let view = camera.inverse();
        let view_projection = projection_matrix(projection) * view;
        log::info!(
            "Camera at {} looking with {:?} projection, {} points to probe",
            Vec3f::from(config.camera.position),
            projection.kind,
            config.probe.points.len()
        );

        Ok(Self {
            eye: Vec3::from(config.camera.position),
            view,
            view_projection,
            ground,
            points: config.probe.points.clone(),
            separator: config.probe.separator.clone(),
        })
    }

    /// World to view space
    pub fn view(&self) -> &Mat4f {
        &self.view
    }

    /// World to clip space
    pub fn view_projection(&self) -> &Mat4f {
        &self.view_projection
    }

    /// Probe a single world-space point
    pub fn sample(&self, point: Vec3f) -> ProbeSample {
        let ndc = self.view_projection.transform_point(point);
        let depth = -self.view.transform_point(point).z;
        let inside = |v: f32| (-1.0..=1.0).contains(&v);
        let on_screen = depth > 0.0 && inside(ndc.x) && inside(ndc.y) && inside(ndc.z);

        ProbeSample {
            point,
            ndc,
            depth,
            on_screen,
            heading: (point - self.eye).angle(),
            ground_hit: self.ground.intersect_with_line_segment(self.eye, point),
        }
    }

    /// Parse a configured point, falling back to the lenient reader
    fn parse_point(&self, text: &str) -> Vec3f {
        match Vec3f::try_from_delimited(text, &self.separator) {
            Ok(point) => point,
            Err(e) => {
                let point = Vec3f::from_delimited(text, &self.separator);
                log::warn!("Probe point {:?}: {}. Read as {}", text, e, point);
                point
            }
        }
    }

    /// Probe every configured point in order
    pub fn run(&self) -> Vec<ProbeSample> {
        self.points
            .iter()
            .map(|text| {
                let sample = self.sample(self.parse_point(text));
                log::debug!("{}", sample);
                sample
            })
            .collect()
    }
}
