use glam::{Quat, Vec3};
use myth_recorder::recorder::{RecorderConfig, RecordingSession};
use myth_recorder::scene::{NodeHandle, Scene, SkinnedMesh};
use myth_recorder::JsonFileSink;

const FRAME_DT: f32 = 1.0 / 60.0;
const FIXED_DT: f32 = 1.0 / 50.0;
const FRAMES: u32 = 180;

/// 演示用的简单骨架：Hips -> Spine -> Head(带表情)
struct Rig {
    scene: Scene,
    root: NodeHandle,
    hips: NodeHandle,
    spine: NodeHandle,
    head: NodeHandle,
}

impl Rig {
    fn new() -> Self {
        let mut scene = Scene::new();
        let face = scene.add_mesh(SkinnedMesh::new("Face").with_blend_shapes(["Smile", "Blink"]));

        let root = scene.build_node("Rig").build();
        let hips = scene.build_node("Hips").with_parent(root).with_position(0.0, 1.0, 0.0).build();
        let spine = scene.build_node("Spine").with_parent(hips).with_position(0.0, 0.4, 0.0).build();
        let head = scene
            .build_node("Head")
            .with_parent(spine)
            .with_position(0.0, 0.5, 0.0)
            .with_mesh(face)
            .build();

        Self {
            scene,
            root,
            hips,
            spine,
            head,
        }
    }

    fn animate(&mut self, time: f32) {
        if let Some(hips) = self.scene.get_node_mut(self.hips) {
            hips.transform.position = Vec3::new(0.0, 1.0 + 0.05 * (time * 6.0).sin(), 0.0);
        }
        if let Some(spine) = self.scene.get_node_mut(self.spine) {
            // Full turns, so the recorded quaternion crosses the sign boundary
            spine.transform.rotation = Quat::from_rotation_y(time * 4.0);
        }
        if let Some(head) = self.scene.get_node_mut(self.head) {
            head.set_morph_weight(0, 50.0 + 50.0 * time.sin());
            head.set_morph_weight(1, if (time * 3.0).fract() < 0.1 { 100.0 } else { 0.0 });
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => RecorderConfig::load(path)?,
        None => RecorderConfig::new("recordings/", "rig_take"),
    };

    let mut rig = Rig::new();
    let mut session = RecordingSession::new(config, JsonFileSink).with_listener(|event| {
        log::debug!("recorder event: {event:?}");
    });
    session.setup(&rig.scene, rig.root)?;

    let start_key = session.config().controls.start_key;
    let stop_key = session.config().controls.stop_key;
    session.handle_key(&rig.scene, start_key)?;

    let mut time = 0.0;
    let mut fixed_accumulator = 0.0;
    for _ in 0..FRAMES {
        time += FRAME_DT;
        rig.animate(time);

        fixed_accumulator += FRAME_DT;
        while fixed_accumulator >= FIXED_DT {
            fixed_accumulator -= FIXED_DT;
            if let Some(export) = session.fixed_tick(&rig.scene)? {
                log::info!("Frame limit reached, clip written to {}", export.path.display());
            }
        }

        session.tick(&rig.scene, FRAME_DT);
    }

    if session.state() == myth_recorder::SessionState::Recording
        && let Some(export) = session.handle_key(&rig.scene, stop_key)?
    {
        log::info!(
            "Recorded {} curves over {:.2}s into {}",
            export.clip.bindings().len(),
            export.clip.duration,
            export.path.display()
        );
    }
    Ok(())
}
