//! Boundary between the quiz core and whatever front-end drives it.

use crate::answer::Verdict;
use crate::camera::CameraFrame;
use crate::countries::Country;
use crate::error::QuizError;
use crate::quiz::Effect;

/// Collaborators that carry out [`Effect`]s.
///
/// Loads are asynchronous from the core's point of view: a host reports
/// completion later by feeding `MapTextureLoaded`, `HighlightReady`, `Resize`
/// or `ResourceFailed` back into [`Quiz::update`](crate::Quiz::update).
pub trait Host {
    fn load_map_texture(&mut self);
    fn measure_viewport(&mut self);
    fn render_highlight(&mut self, index: usize, country: &'static Country);
    fn render_camera(&mut self, frame: &CameraFrame);
    fn play_feedback_sound(&mut self, correct: bool);
    fn show_verdict(&mut self, verdict: &Verdict);
    fn reset_answer_input(&mut self);
    fn report_fatal(&mut self, error: &QuizError);
}

impl Effect {
    pub fn apply<H: Host + ?Sized>(&self, host: &mut H) {
        match self {
            Effect::LoadMapTexture => host.load_map_texture(),
            Effect::MeasureViewport => host.measure_viewport(),
            Effect::RenderHighlight { index, country } => host.render_highlight(*index, country),
            Effect::RenderCamera(frame) => host.render_camera(frame),
            Effect::PlayFeedbackSound { correct } => host.play_feedback_sound(*correct),
            Effect::ShowVerdict(verdict) => host.show_verdict(verdict),
            Effect::ResetAnswerInput => host.reset_answer_input(),
            Effect::ReportFatal(error) => host.report_fatal(error),
        }
    }
}

pub fn apply_all<H: Host + ?Sized>(effects: &[Effect], host: &mut H) {
    for effect in effects {
        effect.apply(host);
    }
}
