use crate::commands::{
    parse_domain, render_health_type, render_progress, render_ranking, render_scores,
    render_suggestions,
};
use crate::infra::{build_service, Service};
use clap::Args;
use health_companions::catalog::domains::all_companions;
use health_companions::catalog::{DomainId, QuestionKind};
use health_companions::checkin::{AcceptedQuest, CheckInDraft, ClassifierStrategy, RawAnswers};
use health_companions::config::CompanionsConfig;
use health_companions::error::AppError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Number of weekly check-ins to simulate
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u8).range(1..=12))]
    pub(crate) weeks: u8,
    /// Seed for the simulated answers and garden placement
    #[arg(long, default_value_t = 7)]
    pub(crate) seed: u64,
    /// Classifier to demo (defaults to COMPANIONS_CLASSIFIER)
    #[arg(long, value_parser = parse_classifier)]
    pub(crate) classifier: Option<ClassifierStrategy>,
    /// Companion the simulated user starts out struggling with
    #[arg(long, default_value = "pip", value_parser = parse_domain)]
    pub(crate) focus: DomainId,
}

fn parse_classifier(raw: &str) -> Result<ClassifierStrategy, String> {
    raw.parse::<ClassifierStrategy>()
}

/// Run a scripted journey against an in-memory store: sign up, check in weekly, accept and
/// complete quests, then print progress.
pub(crate) fn run_demo(args: DemoArgs, config: &CompanionsConfig) -> Result<(), AppError> {
    let DemoArgs {
        weeks,
        seed,
        classifier,
        focus,
    } = args;

    let config = CompanionsConfig {
        data_path: None,
        classifier: classifier.unwrap_or(config.classifier),
        scoring: config.scoring,
    };
    let service = build_service(&config, None)?;
    let mut rng = StdRng::seed_from_u64(seed);

    println!(
        "Health companions demo ({} classifier, {weeks} weeks)",
        config.classifier.as_str()
    );
    let (session, record) = service.create_account("demo@companions.local", "Demo")?;
    println!("Signed up {} (forest code {})", session.user, record.forest_code);

    for week in 0..weeks {
        println!("\nWeek {}", week + 1);
        let answers = simulated_answers(focus, week, &mut rng);
        let evaluation = service.evaluate(&answers);
        render_scores(&evaluation.scores);
        render_ranking(&evaluation.ranking);

        let accepted: Vec<AcceptedQuest> = evaluation
            .ranking
            .needs_attention
            .iter()
            .take(2)
            .map(|entry| AcceptedQuest::suggestion(entry.domain, usize::from(week) % 3))
            .collect();
        let saved = service.save_check_in(
            &session,
            CheckInDraft {
                answers,
                accepted_quests: accepted,
                ..CheckInDraft::default()
            },
        )?;
        if week == 0 {
            if let Some(health_type) = saved.health_type {
                render_health_type(&health_type.into());
            }
            render_suggestions(saved.health_type, &evaluation.ranking);
        }

        complete_one_quest(&service, &session, &mut rng)?;
    }

    println!();
    let record = service.record(&session)?;
    let progress = service.progress(&session)?;
    render_progress(&record, &progress);
    Ok(())
}

fn complete_one_quest(
    service: &Service,
    session: &health_companions::checkin::Session,
    rng: &mut StdRng,
) -> Result<(), AppError> {
    let record = service.record(session)?;
    let Some(quest) = record.quests.active().next() else {
        return Ok(());
    };
    let element = service.complete_quest(session, &quest.id, rng)?;
    println!(
        "Completed '{}' -> {} {} planted",
        quest.text, element.emoji, element.name
    );
    Ok(())
}

/// Scale answers drift upward week over week; the focus companion starts low.
fn simulated_answers(focus: DomainId, week: u8, rng: &mut StdRng) -> RawAnswers {
    let mut answers = RawAnswers::new();
    for companion in all_companions() {
        let baseline = if companion.id == focus { 22.0 } else { 55.0 };
        for item in companion.questions {
            let value = match item.kind {
                QuestionKind::Scale { .. } => {
                    let jitter: f64 = rng.gen_range(-8.0..8.0);
                    (baseline + f64::from(week) * 6.0 + jitter).clamp(0.0, 100.0).round()
                }
                QuestionKind::Choice { options } => {
                    rng.gen_range(0..options.len().max(1)) as f64
                }
            };
            answers.insert(item.key.to_string(), value);
        }
    }
    answers
}
