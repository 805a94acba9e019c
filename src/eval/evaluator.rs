use rayon::prelude::*;

use crate::{
    compose::layers::{RenderLayer, compose},
    effects::{
        color::{ColorState, color_at},
        curves::{EffectCurves, curves_at},
    },
    foundation::core::{FrameIndex, FrameRange},
    foundation::error::{RicochetError, RicochetResult},
    motion::{
        collision::{CollisionState, collision_at},
        reflect::{MotionState, motion_at},
    },
    scene::resolve::Scene,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Everything derived for one frame, ending in the layer list.
pub struct EvaluatedFrame {
    /// Evaluated frame index.
    pub frame: FrameIndex,
    /// Object position and per-axis cycles.
    pub motion: MotionState,
    /// Bounce counters and wall proximity.
    pub collision: CollisionState,
    /// Object hue.
    pub color: ColorState,
    /// Secondary effect values.
    pub curves: EffectCurves,
    /// Draw layers in painter's order.
    pub layers: Vec<RenderLayer>,
}

/// Options for [`Evaluator::eval_range`].
#[derive(Clone, Debug)]
pub struct EvalThreading {
    /// Evaluate chunks on a dedicated rayon pool.
    pub parallel: bool,
    /// Frames per chunk; 0 is treated as 1.
    pub chunk_size: usize,
    /// Override the number of rayon worker threads. `None` uses rayon defaults.
    pub threads: Option<usize>,
}

impl Default for EvalThreading {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_size: 64,
            threads: None,
        }
    }
}

/// Stateless evaluator from scene and frame index to layer list.
pub struct Evaluator;

impl Evaluator {
    #[tracing::instrument(skip(scene))]
    /// Evaluate a single frame. Any frame may be requested in any order.
    pub fn eval_frame(scene: &Scene, frame: FrameIndex) -> EvaluatedFrame {
        let motion = motion_at(scene, frame);
        let collision = collision_at(scene, &motion);
        let color = color_at(scene, frame, &collision);
        let curves = curves_at(scene, frame, collision.proximity);
        let layers = compose(scene, &motion, &color, &curves);
        EvaluatedFrame {
            frame,
            motion,
            collision,
            color,
            curves,
            layers,
        }
    }

    #[tracing::instrument(skip(scene, threading))]
    /// Evaluate every frame of `range`, returned in frame order.
    ///
    /// With `threading.parallel` the range is split into chunks evaluated on a dedicated pool;
    /// the result is identical to the sequential path.
    pub fn eval_range(
        scene: &Scene,
        range: FrameRange,
        threading: &EvalThreading,
    ) -> RicochetResult<Vec<EvaluatedFrame>> {
        if range.is_empty() {
            return Err(RicochetError::validation("eval_range requires a non-empty range"));
        }

        if !threading.parallel {
            return Ok(range.frames().map(|f| Self::eval_frame(scene, f)).collect());
        }

        let pool = build_thread_pool(threading.threads)?;
        let chunk_size = normalized_chunk_size(threading.chunk_size).min(range.len_frames());
        let mut out = Vec::with_capacity(usize::try_from(range.len_frames()).unwrap_or(0));

        let mut chunk_start = range.start.0;
        while chunk_start < range.end.0 {
            let chunk_end = (chunk_start + chunk_size).min(range.end.0);
            tracing::debug!(chunk_start, chunk_end, "evaluating chunk");
            let chunk: Vec<EvaluatedFrame> = pool.install(|| {
                (chunk_start..chunk_end)
                    .into_par_iter()
                    .map(|f| Self::eval_frame(scene, FrameIndex(f)))
                    .collect()
            });
            out.extend(chunk);
            chunk_start = chunk_end;
        }
        Ok(out)
    }
}

fn normalized_chunk_size(chunk_size: usize) -> u64 {
    if chunk_size == 0 {
        1
    } else {
        chunk_size as u64
    }
}

fn build_thread_pool(threads: Option<usize>) -> RicochetResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(RicochetError::validation(
            "eval_range 'threads' must be >= 1 when set",
        ));
    }
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| RicochetError::evaluation(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/eval/evaluator.rs"]
mod tests;
