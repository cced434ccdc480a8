use crate::infra::Service;
use clap::{Args, Subcommand};
use health_companions::catalog::health_types::neutral_framing;
use health_companions::catalog::{DomainId, HealthType};
use health_companions::checkin::{
    AcceptedQuest, CheckInDraft, DomainScore, HealthTypeView, NewQuest, Progress, QuestId,
    QuestStatus, RawAnswers, ScoreRanking, Session, UserRecord,
};
use health_companions::error::AppError;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct SignupArgs {
    /// Email used as the account key (case-insensitive)
    #[arg(long)]
    pub(crate) email: String,
    /// Display name
    #[arg(long, default_value = "")]
    pub(crate) name: String,
}

#[derive(Args, Debug)]
pub(crate) struct LoginArgs {
    #[arg(long)]
    pub(crate) email: String,
}

#[derive(Args, Debug)]
pub(crate) struct CheckInArgs {
    /// JSON file with raw answers (`{"pip-1": 20}`) or a full check-in draft
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Accept a companion's suggested quest, e.g. `pip:0` (repeatable)
    #[arg(long = "accept", value_parser = parse_accepted)]
    pub(crate) accepted: Vec<AcceptedQuest>,
    /// Health type chosen outside the questionnaire (`ISTJ`, `calm_restorer`)
    #[arg(long)]
    pub(crate) health_type: Option<String>,
    /// Free-text reflection stored with the check-in
    #[arg(long)]
    pub(crate) reflection: Option<String>,
    /// Score and classify without saving
    #[arg(long)]
    pub(crate) dry_run: bool,
}

#[derive(Subcommand, Debug)]
pub(crate) enum QuestCommand {
    /// List quests on the board
    List,
    /// Add a suggested (`--index`) or custom (`--text`) quest
    Add(QuestAddArgs),
    /// Complete a quest and plant a garden element
    Complete { id: String },
    /// Remove a quest from the board
    Remove { id: String },
}

#[derive(Args, Debug)]
pub(crate) struct QuestAddArgs {
    #[arg(long, value_parser = parse_domain)]
    pub(crate) domain: DomainId,
    #[arg(long, conflicts_with = "text")]
    pub(crate) index: Option<usize>,
    #[arg(long, required_unless_present = "index")]
    pub(crate) text: Option<String>,
    #[arg(long)]
    pub(crate) icon: Option<String>,
}

/// Answers file contents: a bare answer map or a draft with quests and a reflection.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum AnswersFile {
    Draft(CheckInDraft),
    Answers(RawAnswers),
}

impl AnswersFile {
    fn into_draft(self) -> CheckInDraft {
        match self {
            AnswersFile::Draft(draft) => draft,
            AnswersFile::Answers(answers) => CheckInDraft {
                answers,
                ..CheckInDraft::default()
            },
        }
    }
}

pub(crate) fn parse_domain(raw: &str) -> Result<DomainId, String> {
    raw.parse::<DomainId>().map_err(|err| err.to_string())
}

pub(crate) fn parse_accepted(raw: &str) -> Result<AcceptedQuest, String> {
    let (domain, index) = raw
        .split_once(':')
        .ok_or_else(|| format!("expected <companion>:<index>, found '{raw}'"))?;
    let domain = parse_domain(domain)?;
    let index = index
        .trim()
        .parse::<usize>()
        .map_err(|err| format!("invalid quest index '{index}' ({err})"))?;
    Ok(AcceptedQuest::suggestion(domain, index))
}

fn require_session(service: &Service) -> Result<(Session, UserRecord), AppError> {
    service.resume()?.ok_or_else(|| {
        AppError::Input("no active session; run `signup` or `login` first".to_string())
    })
}

pub(crate) fn signup(service: &Service, args: SignupArgs) -> Result<(), AppError> {
    let (session, record) = service.create_account(&args.email, &args.name)?;
    let name = if record.name.is_empty() {
        session.user.as_str()
    } else {
        record.name.as_str()
    };
    println!("Welcome, {name}! Your forest code is {}.", record.forest_code);
    println!("Signed in as {}", session.user);
    Ok(())
}

pub(crate) fn login(service: &Service, args: LoginArgs) -> Result<(), AppError> {
    let (session, record) = service.login(&args.email)?;
    println!("Signed in as {}", session.user);
    if let Some(last) = record.last_check_in {
        println!("Last check-in: {}", last.format("%Y-%m-%d"));
    }
    Ok(())
}

pub(crate) fn logout(service: &Service) -> Result<(), AppError> {
    match service.resume()? {
        Some((session, _)) => {
            let user = session.user.clone();
            service.logout(session)?;
            println!("Signed out {user}");
        }
        None => println!("No active session"),
    }
    Ok(())
}

pub(crate) fn check_in(service: &Service, args: CheckInArgs) -> Result<(), AppError> {
    let bytes = fs::read(&args.answers)?;
    let mut draft = serde_json::from_slice::<AnswersFile>(&bytes)?.into_draft();
    draft.accepted_quests.extend(args.accepted);
    if args.health_type.is_some() {
        draft.health_type = args.health_type;
    }
    if args.reflection.is_some() {
        draft.reflection = args.reflection;
    }

    let evaluation = service.evaluate(&draft.answers);
    render_scores(&evaluation.scores);
    render_ranking(&evaluation.ranking);

    if args.dry_run {
        render_health_type(&evaluation.health_type);
        println!("\nDry run: nothing saved");
        return Ok(());
    }

    let (session, _) = require_session(service)?;
    let record = service.save_check_in(&session, draft)?;
    if let Some(health_type) = record.health_type {
        render_health_type(&HealthTypeView::from(health_type));
    }
    render_suggestions(record.health_type, &evaluation.ranking);
    println!(
        "\nCheck-in saved ({} on record, {} active quests)",
        record.history.len(),
        record.quests.active().count()
    );
    Ok(())
}

pub(crate) fn quest(service: &Service, command: QuestCommand) -> Result<(), AppError> {
    let (session, record) = require_session(service)?;
    match command {
        QuestCommand::List => render_quests(&record),
        QuestCommand::Add(args) => {
            let quest = match (args.index, args.text) {
                (Some(index), _) => service.add_suggested_quest(&session, args.domain, index)?,
                (None, Some(text)) => service.add_quest(
                    &session,
                    NewQuest::custom(args.domain, text, args.icon),
                )?,
                (None, None) => {
                    return Err(AppError::Input(
                        "either --index or --text is required".to_string(),
                    ))
                }
            };
            println!("{} {} [{}] {}", quest.icon, quest.domain, quest.id, quest.text);
        }
        QuestCommand::Complete { id } => {
            let element =
                service.complete_quest(&session, &QuestId(id), &mut rand::thread_rng())?;
            println!(
                "Quest complete! {} {} grows in your garden",
                element.emoji, element.name
            );
        }
        QuestCommand::Remove { id } => {
            let removed = service.remove_quest(&session, &QuestId(id))?;
            println!("Removed '{}'", removed.text);
        }
    }
    Ok(())
}

pub(crate) fn progress(service: &Service) -> Result<(), AppError> {
    let (session, record) = require_session(service)?;
    let progress = service.progress(&session)?;
    render_progress(&record, &progress);
    Ok(())
}

pub(crate) fn render_scores(scores: &[DomainScore]) {
    println!("Companion scores");
    for entry in scores {
        let companion = entry.domain.companion();
        println!(
            "- {} {:<6} {:>5.1} {:<6} {}",
            companion.emoji,
            companion.name,
            entry.score,
            entry.band.label(),
            companion.mood_emoji(Some(entry.band))
        );
    }
}

pub(crate) fn render_ranking(ranking: &ScoreRanking) {
    let names: Vec<&str> = ranking
        .needs_attention
        .iter()
        .map(|entry| entry.domain.companion().name)
        .collect();
    println!("Needs attention: {}", names.join(", "));
}

pub(crate) fn render_health_type(view: &HealthTypeView) {
    println!(
        "\nHealth type: {} {} ({})",
        view.profile.critter, view.profile.name, view.health_type
    );
    println!("  {}", view.profile.tagline);
    println!("  Quest style: {}", view.quest_style);
}

/// One framed suggestion per companion that needs attention.
pub(crate) fn render_suggestions(health_type: Option<HealthType>, ranking: &ScoreRanking) {
    println!("\nSuggested quests");
    for entry in &ranking.needs_attention {
        let companion = entry.domain.companion();
        let framing = match health_type {
            Some(health_type) => health_type.companion_framing(companion.name),
            None => neutral_framing(companion.name),
        };
        println!("  {framing}");
        for (index, quest) in companion.micro_quests.iter().enumerate() {
            println!("    {}:{} {} {}", entry.domain, index, quest.icon, quest.text);
        }
    }
}

pub(crate) fn render_quests(record: &UserRecord) {
    if record.quests.quests().is_empty() {
        println!("No quests yet");
        return;
    }
    for quest in record.quests.quests() {
        let marker = match quest.status {
            QuestStatus::Active => " ",
            QuestStatus::Completed => "x",
        };
        println!(
            "[{marker}] {} {:<6} {} ({})",
            quest.icon,
            quest.domain.as_str(),
            quest.text,
            quest.id
        );
    }
}

pub(crate) fn render_progress(record: &UserRecord, progress: &Progress) {
    println!(
        "{} - member since {}",
        record.email,
        progress.stats.member_since.format("%Y-%m-%d")
    );
    if let Some(view) = &progress.health_type {
        render_health_type(view);
    }

    println!("\nCompanions");
    for (domain, level) in &progress.evolution {
        let companion = domain.companion();
        let band = progress
            .latest_scores
            .as_deref()
            .and_then(|scores| scores.iter().find(|entry| entry.domain == *domain))
            .map(|entry| entry.band);
        println!(
            "- {} {:<6} level {} {}",
            companion.mood_emoji(band),
            companion.name,
            level,
            "*".repeat(usize::from(*level))
        );
    }

    println!(
        "\nStreak: {} | check-ins: {} | quests completed: {} | garden: {}",
        progress.streak,
        progress.stats.check_ins,
        progress.stats.quests_completed,
        progress.stats.garden_size
    );
    if !record.garden.is_empty() {
        let garden: String = record
            .garden
            .iter()
            .map(|element| element.emoji.as_str())
            .collect();
        println!("Garden: {garden}  (forest code {})", record.forest_code);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::build_service;
    use health_companions::catalog::TypeCode;
    use health_companions::checkin::QuestSource;
    use health_companions::config::CompanionsConfig;

    #[test]
    fn accepted_quests_parse_from_companion_and_index() {
        let accepted = parse_accepted("Luna:2").expect("parses");
        assert_eq!(accepted.domain, DomainId::Luna);
        assert_eq!(accepted.source, QuestSource::Suggestion { index: 2 });

        assert!(parse_accepted("luna").is_err());
        assert!(parse_accepted("moon:1").is_err());
        assert!(parse_accepted("luna:first").is_err());
    }

    #[test]
    fn answers_file_accepts_bare_maps_and_drafts() {
        let bare: AnswersFile =
            serde_json::from_str(r#"{"pip-1": 20, "luna-1": 80}"#).expect("bare map");
        let draft = bare.into_draft();
        assert_eq!(draft.answers.len(), 2);
        assert!(draft.accepted_quests.is_empty());

        let full: AnswersFile = serde_json::from_str(
            r#"{"answers": {"pip-1": 20}, "reflection": "tired", "health_type": "INFP"}"#,
        )
        .expect("draft");
        let draft = full.into_draft();
        assert_eq!(draft.answers.get("pip-1"), Some(&20.0));
        assert_eq!(draft.reflection.as_deref(), Some("tired"));
        assert_eq!(draft.health_type.as_deref(), Some("INFP"));
    }

    #[test]
    fn commands_share_the_persisted_session() {
        let dir = tempfile::tempdir().expect("temp dir");
        let data = dir.path().join("records.json");
        let answers = dir.path().join("answers.json");
        fs::write(&answers, r#"{"pip-1": 20, "pip-2": 30, "luna-1": 80}"#).expect("answers");

        let config = CompanionsConfig::default();
        let service = build_service(&config, Some(&data)).expect("service");
        assert!(matches!(progress(&service), Err(AppError::Input(_))));

        signup(
            &service,
            SignupArgs {
                email: "robin@example.com".to_string(),
                name: "Robin".to_string(),
            },
        )
        .expect("signup");

        let service = build_service(&config, Some(&data)).expect("service reopens");
        check_in(
            &service,
            CheckInArgs {
                answers,
                accepted: vec![AcceptedQuest::suggestion(DomainId::Pip, 0)],
                health_type: None,
                reflection: None,
                dry_run: false,
            },
        )
        .expect("check-in");

        let (_, record) = require_session(&service).expect("session");
        assert_eq!(record.health_type, Some(HealthType::Axis(TypeCode::Istj)));
        let quest_id = record.quests.quests()[0].id.0.clone();
        quest(&service, QuestCommand::Complete { id: quest_id }).expect("complete");
        progress(&service).expect("progress");

        logout(&service).expect("logout");
        assert!(matches!(
            quest(&service, QuestCommand::List),
            Err(AppError::Input(_))
        ));
    }
}
