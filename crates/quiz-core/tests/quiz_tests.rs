// Host-side tests for the quiz state machine.

use quiz_core::{
    apply_all, CameraFrame, Countries, Country, Effect, Event, FailurePolicy, Highlight, Host,
    Phase, Quiz, QuizConfig, QuizError, Resource, Scale, Verdict,
};

fn start(seed: u64) -> (Quiz, Vec<Effect>) {
    Quiz::new(Countries::builtin().unwrap(), QuizConfig::default(), seed).unwrap()
}

fn answering(seed: u64) -> Quiz {
    let (mut quiz, _) = start(seed);
    let index = quiz.current().index;
    quiz.update(Event::MapTextureLoaded);
    quiz.update(Event::Resize {
        width: 800,
        height: 600,
    });
    quiz.update(Event::HighlightReady {
        country_index: index,
    });
    assert!(matches!(quiz.phase(), Phase::Answering { .. }));
    quiz
}

fn settle(quiz: &mut Quiz) {
    for _ in 0..5_000 {
        if !quiz.wants_animation_frames() {
            return;
        }
        quiz.update(Event::AnimationFrame { delta_ms: 16.0 });
    }
    panic!("camera never came to rest");
}

fn is_fatal(effects: &[Effect]) -> bool {
    effects.iter().any(|e| matches!(e, Effect::ReportFatal(_)))
}

#[test]
fn new_session_requests_first_round_resources() {
    let (quiz, effects) = start(5);
    let current = *quiz.current();
    assert_eq!(quiz.phase(), &Phase::Initializing(Default::default()));
    assert_eq!(
        effects,
        vec![
            Effect::LoadMapTexture,
            Effect::MeasureViewport,
            Effect::RenderHighlight {
                index: current.index,
                country: current.country,
            },
        ]
    );
    assert_eq!(quiz.selector().recent(), &[current.index]);
    assert!(!quiz.wants_animation_frames());
}

#[test]
fn resources_in_any_order_lead_to_answering() {
    let (mut quiz, _) = start(11);
    let index = quiz.current().index;

    let effects = quiz.update(Event::HighlightReady {
        country_index: index,
    });
    assert!(effects.is_empty());
    assert_eq!(quiz.phase().name(), "awaiting resources");

    quiz.update(Event::Resize {
        width: 1024,
        height: 512,
    });
    assert_eq!(quiz.phase().name(), "awaiting resources");

    let effects = quiz.update(Event::MapTextureLoaded);
    assert_eq!(quiz.phase().name(), "answering");
    assert_eq!(quiz.phase().answer_input(), Some(""));
    assert_eq!(effects[0], Effect::ResetAnswerInput);
    assert!(matches!(effects[1], Effect::RenderCamera(_)));
    assert_eq!(quiz.viewport(), Some((1024, 512)));

    let rig = quiz.phase().rig().unwrap();
    let country = quiz.current().country;
    assert_eq!(rig.distance.get(), quiz.config().intro_distance);
    assert_eq!(rig.distance.target(), country.scale.camera_distance());
    assert_eq!(rig.latitude.get(), country.latitude);
    assert_eq!(rig.longitude.get(), country.longitude);
    assert!(quiz.wants_animation_frames());
}

#[test]
fn each_submit_shows_exactly_one_result() {
    for ticks in 0..6 {
        let mut quiz = answering(ticks);
        for _ in 0..ticks {
            let effects = quiz.update(Event::AnimationFrame { delta_ms: 16.0 });
            assert!(matches!(effects.as_slice(), [Effect::RenderCamera(_)]));
        }
        let effects = quiz.update(Event::AnswerSubmitted("Atlantis".into()));
        let verdicts = effects
            .iter()
            .filter(|e| matches!(e, Effect::ShowVerdict(_)))
            .count();
        assert_eq!(verdicts, 1, "after {ticks} ticks");
        assert_eq!(quiz.phase().name(), "showing result");
        assert!(!quiz.phase().verdict().unwrap().correct);
    }
}

#[test]
fn correct_answer_is_judged_against_current_country() {
    let mut quiz = answering(3);
    let current = *quiz.current();
    let typed = current.country.name.to_uppercase();
    quiz.update(Event::AnswerEdited(typed.clone()));
    assert_eq!(quiz.phase().answer_input(), Some(typed.as_str()));

    let effects = quiz.update(Event::AnswerSubmitted(typed.clone()));
    let verdict = Verdict::judge(current.index, current.country, &typed);
    assert!(verdict.correct);
    assert_eq!(
        effects,
        vec![
            Effect::PlayFeedbackSound { correct: true },
            Effect::ShowVerdict(verdict.clone()),
        ]
    );
    assert_eq!(quiz.phase().verdict(), Some(&verdict));
}

#[test]
fn continue_moves_to_next_country_once_its_highlight_is_ready() {
    let mut quiz = answering(8);
    settle(&mut quiz);
    let first = *quiz.current();
    quiz.update(Event::AnswerSubmitted(String::new()));

    let effects = quiz.update(Event::Continue);
    let next = *quiz.phase().pending_country().expect("next country drawn");
    assert_ne!(next.index, first.index);
    assert_eq!(
        effects,
        vec![Effect::RenderHighlight {
            index: next.index,
            country: next.country,
        }]
    );
    assert_eq!(quiz.current().index, first.index);

    // frames keep flowing while the highlight renders
    quiz.update(Event::AnimationFrame { delta_ms: 16.0 });
    assert_eq!(quiz.phase().name(), "transitioning to next");

    let effects = quiz.update(Event::HighlightReady {
        country_index: next.index,
    });
    assert_eq!(quiz.phase().name(), "answering");
    assert_eq!(quiz.phase().answer_input(), Some(""));
    assert_eq!(quiz.current().index, next.index);
    assert_eq!(effects[0], Effect::ResetAnswerInput);

    let rig = quiz.phase().rig().unwrap();
    assert_eq!(rig.latitude.target(), next.country.latitude);
    assert_eq!(rig.longitude.target(), next.country.longitude);
    assert_eq!(rig.distance.target(), next.country.scale.camera_distance());
    // the camera swings from where it was
    assert_eq!(rig.latitude.get(), first.country.latitude);
    assert_eq!(quiz.wants_animation_frames(), rig.is_active());
}

#[test]
fn stale_highlight_is_fatal_and_error_absorbs_everything() {
    let mut quiz = answering(21);
    let first = quiz.current().index;
    quiz.update(Event::AnswerSubmitted("x".into()));
    quiz.update(Event::Continue);

    let effects = quiz.update(Event::HighlightReady {
        country_index: first,
    });
    assert!(is_fatal(&effects));
    assert!(matches!(
        quiz.phase().error(),
        Some(QuizError::ProtocolViolation {
            phase: "transitioning to next",
            ..
        })
    ));
    assert!(!quiz.wants_animation_frames());

    for event in [
        Event::Continue,
        Event::AnimationFrame { delta_ms: 16.0 },
        Event::MapTextureLoaded,
        Event::AnswerSubmitted("again".into()),
        Event::VisibilityChanged(false),
    ] {
        assert!(quiz.update(event).is_empty());
        assert_eq!(quiz.phase().name(), "error");
    }
}

#[test]
fn unexpected_events_while_loading_are_fatal() {
    let cases = [
        Event::AnswerSubmitted("France".into()),
        Event::AnswerEdited("Fr".into()),
        Event::AnimationFrame { delta_ms: 16.0 },
        Event::Continue,
    ];
    for event in cases {
        let (mut quiz, _) = start(2);
        let effects = quiz.update(event.clone());
        assert!(is_fatal(&effects), "{event:?}");
        assert!(matches!(
            quiz.phase().error(),
            Some(QuizError::ProtocolViolation {
                phase: "initializing",
                ..
            })
        ));
    }

    let (mut quiz, _) = start(2);
    quiz.update(Event::MapTextureLoaded);
    quiz.update(Event::Continue);
    assert!(matches!(
        quiz.phase().error(),
        Some(QuizError::ProtocolViolation {
            phase: "awaiting resources",
            ..
        })
    ));
}

#[test]
fn continue_while_answering_is_fatal() {
    let mut quiz = answering(4);
    let effects = quiz.update(Event::Continue);
    assert!(is_fatal(&effects));
    assert_eq!(quiz.phase().name(), "error");
}

#[test]
fn hidden_or_settled_sessions_do_not_want_frames() {
    let mut quiz = answering(6);
    assert!(quiz.wants_animation_frames());

    assert!(quiz.update(Event::VisibilityChanged(false)).is_empty());
    assert!(!quiz.is_visible());
    assert!(!quiz.wants_animation_frames());
    assert_eq!(quiz.phase().name(), "answering");

    quiz.update(Event::VisibilityChanged(true));
    assert!(quiz.wants_animation_frames());
    settle(&mut quiz);
    assert!(!quiz.wants_animation_frames());
    let distance = quiz.phase().rig().unwrap().distance.get();
    assert_eq!(distance, quiz.current().country.scale.camera_distance());
}

#[test]
fn resize_is_accepted_in_every_camera_phase() {
    let mut quiz = answering(9);
    let resize = Event::Resize {
        width: 300,
        height: 600,
    };
    let effects = quiz.update(resize.clone());
    assert!(matches!(effects.as_slice(), [Effect::RenderCamera(_)]));
    assert_eq!(quiz.phase().name(), "answering");

    quiz.update(Event::AnswerSubmitted("no".into()));
    quiz.update(resize.clone());
    assert_eq!(quiz.phase().name(), "showing result");

    quiz.update(Event::Continue);
    quiz.update(resize);
    assert_eq!(quiz.phase().name(), "transitioning to next");
    assert_eq!(quiz.viewport(), Some((300, 600)));
    let frame = quiz.camera_frame().unwrap();
    assert!((frame.perspective.x_axis.x * 0.5 - frame.perspective.y_axis.y).abs() < 1e-4);
}

#[test]
fn oversized_frame_delta_is_clamped() {
    let mut quiz = answering(13);
    let mut expected = quiz.phase().rig().unwrap().clone();
    expected.step(quiz.config().max_frame_delta_ms);

    quiz.update(Event::AnimationFrame { delta_ms: 60_000.0 });
    assert_eq!(quiz.phase().rig(), Some(&expected));

    let before = quiz.phase().rig().unwrap().clone();
    quiz.update(Event::AnimationFrame { delta_ms: -5.0 });
    quiz.update(Event::AnimationFrame { delta_ms: f32::NAN });
    let rig = quiz.phase().rig().unwrap();
    assert!(rig.distance.get().is_finite());
    assert_eq!(rig.distance.get(), before.distance.get());
}

#[test]
fn resource_failure_is_fatal_by_default() {
    let (mut quiz, _) = start(1);
    let effects = quiz.update(Event::ResourceFailed {
        resource: Resource::MapTexture,
        reason: "404".into(),
    });
    assert_eq!(
        effects,
        vec![Effect::ReportFatal(QuizError::ResourceFailed {
            resource: Resource::MapTexture,
            reason: "404".into(),
        })]
    );
    assert_eq!(quiz.phase().name(), "error");
}

#[test]
fn retry_policy_reissues_loads_then_gives_up() {
    let config =
        QuizConfig::default().with_failure_policy(FailurePolicy::Retry { max_attempts: 3 });
    let (mut quiz, _) = Quiz::new(Countries::builtin().unwrap(), config, 17).unwrap();
    let fail = || Event::ResourceFailed {
        resource: Resource::MapTexture,
        reason: "network".into(),
    };

    assert_eq!(quiz.update(fail()), vec![Effect::LoadMapTexture]);
    assert_eq!(quiz.update(fail()), vec![Effect::LoadMapTexture]);
    assert_eq!(quiz.phase().name(), "initializing");
    assert!(is_fatal(&quiz.update(fail())));
    assert_eq!(quiz.phase().name(), "error");
}

#[test]
fn retry_policy_covers_next_country_highlight() {
    let config =
        QuizConfig::default().with_failure_policy(FailurePolicy::Retry { max_attempts: 2 });
    let (mut quiz, _) = Quiz::new(Countries::builtin().unwrap(), config, 30).unwrap();
    let index = quiz.current().index;
    quiz.update(Event::MapTextureLoaded);
    quiz.update(Event::Resize {
        width: 640,
        height: 480,
    });
    quiz.update(Event::HighlightReady {
        country_index: index,
    });
    quiz.update(Event::AnswerSubmitted("?".into()));
    quiz.update(Event::Continue);
    let next = *quiz.phase().pending_country().unwrap();
    let resource = Resource::Highlight {
        country_index: next.index,
    };

    let effects = quiz.update(Event::ResourceFailed {
        resource,
        reason: "svg".into(),
    });
    assert_eq!(
        effects,
        vec![Effect::RenderHighlight {
            index: next.index,
            country: next.country,
        }]
    );
    quiz.update(Event::HighlightReady {
        country_index: next.index,
    });
    assert_eq!(quiz.phase().name(), "answering");
}

#[test]
fn retry_budget_is_per_load_not_per_session() {
    static TRIO: [Country; 3] = [
        Country {
            code: "aa",
            name: "Alpha",
            alternative_names: &[],
            latitude: 10.0,
            longitude: -120.0,
            scale: Scale::Small,
            highlight: Highlight::Dot,
        },
        Country {
            code: "bb",
            name: "Bravo",
            alternative_names: &[],
            latitude: -30.0,
            longitude: 40.0,
            scale: Scale::Small,
            highlight: Highlight::Dot,
        },
        Country {
            code: "cc",
            name: "Charlie",
            alternative_names: &[],
            latitude: 55.0,
            longitude: 170.0,
            scale: Scale::Small,
            highlight: Highlight::Dot,
        },
    ];
    let config = QuizConfig {
        history_len: 2,
        ..QuizConfig::default()
    }
    .with_failure_policy(FailurePolicy::Retry { max_attempts: 2 });
    let (mut quiz, _) = Quiz::new(Countries::new(&TRIO).unwrap(), config, 8).unwrap();
    quiz.update(Event::MapTextureLoaded);
    quiz.update(Event::Resize {
        width: 640,
        height: 480,
    });

    // every country comes up twice, and each of its loads fails once
    let mut seen = [0; 3];
    for round in 0..6 {
        let pick = match quiz.phase().pending_country() {
            Some(next) => *next,
            None => *quiz.current(),
        };
        seen[pick.index] += 1;
        let effects = quiz.update(Event::ResourceFailed {
            resource: Resource::Highlight {
                country_index: pick.index,
            },
            reason: "flaky".into(),
        });
        assert_eq!(
            effects,
            vec![Effect::RenderHighlight {
                index: pick.index,
                country: pick.country,
            }],
            "round {round}"
        );
        quiz.update(Event::HighlightReady {
            country_index: pick.index,
        });
        assert_eq!(quiz.phase().name(), "answering", "round {round}");
        quiz.update(Event::AnswerSubmitted("?".into()));
        quiz.update(Event::Continue);
    }
    assert_eq!(seen, [2, 2, 2]);
}

#[test]
fn duplicate_completions_while_loading_are_fatal() {
    let (mut quiz, _) = start(3);
    quiz.update(Event::MapTextureLoaded);
    assert_eq!(quiz.phase().name(), "awaiting resources");
    assert!(is_fatal(&quiz.update(Event::MapTextureLoaded)));
    assert!(matches!(
        quiz.phase().error(),
        Some(QuizError::ProtocolViolation { .. })
    ));

    let (mut quiz, _) = start(4);
    let index = quiz.current().index;
    quiz.update(Event::HighlightReady {
        country_index: index,
    });
    assert!(is_fatal(&quiz.update(Event::HighlightReady {
        country_index: index,
    })));
    assert_eq!(quiz.phase().name(), "error");
}

#[test]
fn failure_of_an_already_loaded_resource_is_a_violation() {
    let config =
        QuizConfig::default().with_failure_policy(FailurePolicy::Retry { max_attempts: 5 });
    let (mut quiz, _) = Quiz::new(Countries::builtin().unwrap(), config, 9).unwrap();
    quiz.update(Event::MapTextureLoaded);
    quiz.update(Event::ResourceFailed {
        resource: Resource::MapTexture,
        reason: "late".into(),
    });
    assert!(matches!(
        quiz.phase().error(),
        Some(QuizError::ProtocolViolation { .. })
    ));
}

#[test]
fn failure_of_an_unrelated_highlight_is_a_violation() {
    let config =
        QuizConfig::default().with_failure_policy(FailurePolicy::Retry { max_attempts: 5 });
    let (mut quiz, _) = Quiz::new(Countries::builtin().unwrap(), config, 40).unwrap();
    let other = (quiz.current().index + 1) % quiz.countries().len();
    quiz.update(Event::ResourceFailed {
        resource: Resource::Highlight {
            country_index: other,
        },
        reason: "stale".into(),
    });
    assert!(matches!(
        quiz.phase().error(),
        Some(QuizError::ProtocolViolation { .. })
    ));
}

#[test]
fn invalid_config_is_rejected_up_front() {
    let config = QuizConfig {
        history_len: 500,
        ..QuizConfig::default()
    };
    assert!(matches!(
        Quiz::new(Countries::builtin().unwrap(), config, 0),
        Err(QuizError::HistoryTooLarge { cap: 500, .. })
    ));
}

#[derive(Default)]
struct RecordingHost {
    calls: Vec<String>,
}

impl Host for RecordingHost {
    fn load_map_texture(&mut self) {
        self.calls.push("load_map_texture".into());
    }
    fn measure_viewport(&mut self) {
        self.calls.push("measure_viewport".into());
    }
    fn render_highlight(&mut self, index: usize, country: &'static Country) {
        self.calls.push(format!("render_highlight {index} {}", country.code));
    }
    fn render_camera(&mut self, _frame: &CameraFrame) {
        self.calls.push("render_camera".into());
    }
    fn play_feedback_sound(&mut self, correct: bool) {
        self.calls.push(format!("play_feedback_sound {correct}"));
    }
    fn show_verdict(&mut self, verdict: &Verdict) {
        self.calls.push(format!("show_verdict {}", verdict.country_name));
    }
    fn reset_answer_input(&mut self) {
        self.calls.push("reset_answer_input".into());
    }
    fn report_fatal(&mut self, error: &QuizError) {
        self.calls.push(format!("report_fatal {error}"));
    }
}

#[test]
fn effects_dispatch_to_host_in_order() {
    let (mut quiz, effects) = start(12);
    let current = *quiz.current();
    let mut host = RecordingHost::default();
    apply_all(&effects, &mut host);
    assert_eq!(
        host.calls,
        vec![
            "load_map_texture".to_string(),
            "measure_viewport".to_string(),
            format!("render_highlight {} {}", current.index, current.country.code),
        ]
    );

    host.calls.clear();
    let effects = quiz.update(Event::AnswerSubmitted("nope".into()));
    apply_all(&effects, &mut host);
    assert_eq!(host.calls.len(), 1);
    assert!(host.calls[0].starts_with("report_fatal"));
}
