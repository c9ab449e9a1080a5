//! The quiz state machine.
//!
//! [`Quiz`] keeps the fields every stage shares (registry, selector, RNG,
//! viewport, visibility, the country on screen) and a [`Phase`] holding only
//! what differs per stage. [`Quiz::update`] consumes one [`Event`] at a time
//! and returns the [`Effect`]s the host must carry out. Any event a phase
//! does not expect moves the quiz into the absorbing [`Phase::Error`].

use fnv::FnvHashMap;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::answer::Verdict;
use crate::camera::{CameraFrame, CameraRig};
use crate::config::{FailurePolicy, QuizConfig};
use crate::countries::{Countries, Country};
use crate::error::{QuizError, QuizResult};
use crate::selector::{CountrySelector, Pick};

/// Something loaded asynchronously by a collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Resource {
    MapTexture,
    Viewport,
    Highlight { country_index: usize },
}

#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    MapTextureLoaded,
    HighlightReady { country_index: usize },
    ResourceFailed { resource: Resource, reason: String },
    /// Viewport size in pixels; the first one also satisfies [`Resource::Viewport`].
    Resize { width: u32, height: u32 },
    VisibilityChanged(bool),
    AnimationFrame { delta_ms: f32 },
    AnswerEdited(String),
    AnswerSubmitted(String),
    Continue,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    LoadMapTexture,
    MeasureViewport,
    RenderHighlight {
        index: usize,
        country: &'static Country,
    },
    RenderCamera(CameraFrame),
    PlayFeedbackSound { correct: bool },
    ShowVerdict(Verdict),
    ResetAnswerInput,
    ReportFatal(QuizError),
}

/// Which first-round resources have arrived.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Loaded {
    pub map_texture: bool,
    pub viewport: bool,
    pub highlight: bool,
}

impl Loaded {
    fn any(&self) -> bool {
        self.map_texture || self.viewport || self.highlight
    }

    fn all(&self) -> bool {
        self.map_texture && self.viewport && self.highlight
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Phase {
    Initializing(Loaded),
    AwaitingResources(Loaded),
    Answering {
        rig: CameraRig,
        input: String,
    },
    ShowingResult {
        rig: CameraRig,
        verdict: Verdict,
    },
    TransitioningToNext {
        rig: CameraRig,
        verdict: Verdict,
        next: Pick,
    },
    Error(QuizError),
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Initializing(_) => "initializing",
            Phase::AwaitingResources(_) => "awaiting resources",
            Phase::Answering { .. } => "answering",
            Phase::ShowingResult { .. } => "showing result",
            Phase::TransitioningToNext { .. } => "transitioning to next",
            Phase::Error(_) => "error",
        }
    }

    pub fn rig(&self) -> Option<&CameraRig> {
        match self {
            Phase::Answering { rig, .. }
            | Phase::ShowingResult { rig, .. }
            | Phase::TransitioningToNext { rig, .. } => Some(rig),
            _ => None,
        }
    }

    pub fn answer_input(&self) -> Option<&str> {
        match self {
            Phase::Answering { input, .. } => Some(input),
            _ => None,
        }
    }

    pub fn verdict(&self) -> Option<&Verdict> {
        match self {
            Phase::ShowingResult { verdict, .. } | Phase::TransitioningToNext { verdict, .. } => {
                Some(verdict)
            }
            _ => None,
        }
    }

    pub fn pending_country(&self) -> Option<&Pick> {
        match self {
            Phase::TransitioningToNext { next, .. } => Some(next),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&QuizError> {
        match self {
            Phase::Error(e) => Some(e),
            _ => None,
        }
    }
}

pub struct Quiz {
    countries: Countries,
    selector: CountrySelector,
    rng: StdRng,
    config: QuizConfig,
    viewport: Option<(u32, u32)>,
    visible: bool,
    current: Pick,
    attempts: FnvHashMap<Resource, u32>,
    phase: Phase,
}

impl Quiz {
    /// Start a session: draws the first country and asks for everything the
    /// first round needs.
    pub fn new(
        countries: Countries,
        config: QuizConfig,
        seed: u64,
    ) -> QuizResult<(Self, Vec<Effect>)> {
        config.validate()?;
        let mut selector = CountrySelector::new(&countries, config.history_len)?;
        let mut rng = StdRng::seed_from_u64(seed);
        let current = selector.next(&mut rng)?;
        log::info!(
            "[quiz] {} countries, history {}, first {}",
            countries.len(),
            selector.cap(),
            current.country.code
        );
        let quiz = Self {
            countries,
            selector,
            rng,
            config,
            viewport: None,
            visible: true,
            current,
            attempts: FnvHashMap::default(),
            phase: Phase::Initializing(Loaded::default()),
        };
        let effects = vec![
            Effect::LoadMapTexture,
            Effect::MeasureViewport,
            Effect::RenderHighlight {
                index: current.index,
                country: current.country,
            },
        ];
        Ok((quiz, effects))
    }

    pub fn update(&mut self, event: Event) -> Vec<Effect> {
        let mut effects = Vec::new();
        if let Phase::Error(e) = &self.phase {
            log::warn!("[quiz] ignoring {:?} after fatal error: {}", event, e);
            return effects;
        }
        match &event {
            Event::VisibilityChanged(visible) => {
                self.visible = *visible;
                return effects;
            }
            Event::Resize { width, height } => {
                self.viewport = Some((*width, *height));
            }
            _ => {}
        }

        let phase = std::mem::replace(&mut self.phase, Phase::Initializing(Loaded::default()));
        let from = phase.name();
        match self.transition(phase, event, &mut effects) {
            Ok(next) => {
                if next.name() != from {
                    log::debug!("[quiz] {} -> {}", from, next.name());
                }
                self.phase = next;
            }
            Err(err) => {
                log::error!("[quiz] fatal while {}: {}", from, err);
                effects.push(Effect::ReportFatal(err.clone()));
                self.phase = Phase::Error(err);
            }
        }
        effects
    }

    /// Whether the host should keep requesting animation frames.
    pub fn wants_animation_frames(&self) -> bool {
        self.visible && self.phase.rig().is_some_and(CameraRig::is_active)
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn current(&self) -> &Pick {
        &self.current
    }

    pub fn countries(&self) -> &Countries {
        &self.countries
    }

    pub fn selector(&self) -> &CountrySelector {
        &self.selector
    }

    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    pub fn viewport(&self) -> Option<(u32, u32)> {
        self.viewport
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn camera_frame(&self) -> Option<CameraFrame> {
        self.phase
            .rig()
            .map(|rig| rig.frame(self.aspect(), self.config.fovy_deg))
    }

    fn render_camera(&self, rig: &CameraRig) -> Effect {
        Effect::RenderCamera(rig.frame(self.aspect(), self.config.fovy_deg))
    }

    fn aspect(&self) -> f32 {
        match self.viewport {
            Some((w, h)) if h > 0 => w as f32 / h as f32,
            _ => 1.0,
        }
    }

    fn transition(
        &mut self,
        phase: Phase,
        event: Event,
        effects: &mut Vec<Effect>,
    ) -> QuizResult<Phase> {
        match phase {
            Phase::Initializing(loaded) | Phase::AwaitingResources(loaded) => {
                self.on_loading(loaded, event, effects)
            }
            Phase::Answering { mut rig, mut input } => match event {
                Event::AnswerEdited(text) => {
                    input = text;
                    Ok(Phase::Answering { rig, input })
                }
                Event::AnswerSubmitted(text) => {
                    let verdict = Verdict::judge(self.current.index, self.current.country, &text);
                    log::info!(
                        "[quiz] {:?} for {} is {}",
                        verdict.answer,
                        self.current.country.code,
                        if verdict.correct { "correct" } else { "wrong" }
                    );
                    effects.push(Effect::PlayFeedbackSound {
                        correct: verdict.correct,
                    });
                    effects.push(Effect::ShowVerdict(verdict.clone()));
                    Ok(Phase::ShowingResult { rig, verdict })
                }
                other => {
                    self.on_camera_event(&mut rig, &other, effects, "answering")?;
                    Ok(Phase::Answering { rig, input })
                }
            },
            Phase::ShowingResult { mut rig, verdict } => match event {
                Event::Continue => {
                    let next = self.selector.next(&mut self.rng)?;
                    effects.push(Effect::RenderHighlight {
                        index: next.index,
                        country: next.country,
                    });
                    Ok(Phase::TransitioningToNext { rig, verdict, next })
                }
                other => {
                    self.on_camera_event(&mut rig, &other, effects, "showing result")?;
                    Ok(Phase::ShowingResult { rig, verdict })
                }
            },
            Phase::TransitioningToNext {
                mut rig,
                verdict,
                next,
            } => match event {
                Event::HighlightReady { country_index } if country_index == next.index => {
                    self.attempts.remove(&Resource::Highlight { country_index });
                    rig.retarget(next.country);
                    self.current = next;
                    effects.push(Effect::ResetAnswerInput);
                    effects.push(self.render_camera(&rig));
                    Ok(Phase::Answering {
                        rig,
                        input: String::new(),
                    })
                }
                Event::ResourceFailed { resource, reason }
                    if resource == (Resource::Highlight { country_index: next.index }) =>
                {
                    self.on_resource_failed(resource, reason, effects)?;
                    Ok(Phase::TransitioningToNext { rig, verdict, next })
                }
                other => {
                    self.on_camera_event(&mut rig, &other, effects, "transitioning to next")?;
                    Ok(Phase::TransitioningToNext { rig, verdict, next })
                }
            },
            Phase::Error(e) => Ok(Phase::Error(e)),
        }
    }

    fn on_loading(
        &mut self,
        mut loaded: Loaded,
        event: Event,
        effects: &mut Vec<Effect>,
    ) -> QuizResult<Phase> {
        let phase_name = if loaded.any() {
            "awaiting resources"
        } else {
            "initializing"
        };
        match event {
            Event::MapTextureLoaded if !loaded.map_texture => {
                self.attempts.remove(&Resource::MapTexture);
                loaded.map_texture = true;
            }
            Event::Resize { .. } => {
                self.attempts.remove(&Resource::Viewport);
                loaded.viewport = true;
            }
            Event::HighlightReady { country_index }
                if country_index == self.current.index && !loaded.highlight =>
            {
                self.attempts.remove(&Resource::Highlight { country_index });
                loaded.highlight = true;
            }
            Event::ResourceFailed { resource, reason } if self.awaited(&loaded, resource) => {
                self.on_resource_failed(resource, reason, effects)?;
            }
            other => return Err(violation(phase_name, &other)),
        }

        if loaded.all() {
            let rig = CameraRig::new(&self.config, self.current.country);
            effects.push(Effect::ResetAnswerInput);
            effects.push(self.render_camera(&rig));
            Ok(Phase::Answering {
                rig,
                input: String::new(),
            })
        } else if loaded.any() {
            Ok(Phase::AwaitingResources(loaded))
        } else {
            Ok(Phase::Initializing(loaded))
        }
    }

    /// Frame ticks and resizes, valid in every phase that owns the camera.
    fn on_camera_event(
        &self,
        rig: &mut CameraRig,
        event: &Event,
        effects: &mut Vec<Effect>,
        phase_name: &'static str,
    ) -> QuizResult<()> {
        match event {
            Event::AnimationFrame { delta_ms } => {
                let delta = if delta_ms.is_finite() {
                    delta_ms.clamp(0.0, self.config.max_frame_delta_ms)
                } else {
                    0.0
                };
                rig.step(delta);
            }
            Event::Resize { .. } => {}
            other => return Err(violation(phase_name, other)),
        }
        effects.push(self.render_camera(&rig));
        Ok(())
    }

    /// Whether a first-round resource is still outstanding.
    fn awaited(&self, loaded: &Loaded, resource: Resource) -> bool {
        match resource {
            Resource::MapTexture => !loaded.map_texture,
            Resource::Viewport => !loaded.viewport,
            Resource::Highlight { country_index } => {
                country_index == self.current.index && !loaded.highlight
            }
        }
    }

    /// Re-issue the load when the policy allows, otherwise fail. Attempts are
    /// counted per load and forgotten once it succeeds.
    fn on_resource_failed(
        &mut self,
        resource: Resource,
        reason: String,
        effects: &mut Vec<Effect>,
    ) -> QuizResult<()> {
        if let FailurePolicy::Retry { max_attempts } = self.config.resource_failure {
            let attempts = self.attempts.entry(resource).or_insert(1);
            if *attempts < max_attempts {
                *attempts += 1;
                log::warn!(
                    "[quiz] {:?} failed ({}), attempt {}/{}",
                    resource,
                    reason,
                    attempts,
                    max_attempts
                );
                effects.push(self.reload(resource)?);
                return Ok(());
            }
        }
        Err(QuizError::ResourceFailed { resource, reason })
    }

    fn reload(&self, resource: Resource) -> QuizResult<Effect> {
        Ok(match resource {
            Resource::MapTexture => Effect::LoadMapTexture,
            Resource::Viewport => Effect::MeasureViewport,
            Resource::Highlight { country_index } => Effect::RenderHighlight {
                index: country_index,
                country: self
                    .countries
                    .get(country_index)
                    .ok_or(QuizError::SelectionOutOfRange {
                        resolved: country_index,
                        table_len: self.countries.len(),
                    })?,
            },
        })
    }
}

fn violation(phase: &'static str, event: &Event) -> QuizError {
    QuizError::ProtocolViolation {
        phase,
        event: format!("{:?}", event),
    }
}
