use std::sync::Arc;

use arena_core::{ArenaConfig, ArenaEngine, GladiatorId, GladiatorSpec, Move, Position, Variant};
use arena_runtime::{
    Agent, AgentId, AgentRepository, AggressiveAgent, GameHistoryRepository, GameRunner,
    InMemoryAgentRepository, InMemoryGameHistory, RandomAgent, RuntimeError, ScriptedAgent,
    StayAgent,
};

fn duel_config() -> ArenaConfig {
    ArenaConfig::new().with_seed(11).with_gladiators(vec![
        GladiatorSpec::new("attacker", 0).at(Position::new(0, 0)),
        GladiatorSpec::new("sitter", 1).at(Position::new(1, 0)),
    ])
}

/// Scripted attacker against a gladiator that never acts.
#[tokio::test]
async fn duel_runs_to_completion_and_persists() {
    let engine = ArenaEngine::new(duel_config()).unwrap();
    let history_repo = Arc::new(InMemoryGameHistory::new());
    let agent_repo = Arc::new(InMemoryAgentRepository::new());

    let attacker = agent_repo.agent_id("ann", "hunter", "arena").unwrap();
    let sitter = agent_repo.agent_id("bob", "rock", "arena").unwrap();
    let script = vec![
        Move::Attack {
            target: GladiatorId(1)
        };
        200
    ];
    let agents: Vec<(AgentId, Box<dyn Agent>)> = vec![
        (attacker, Box::new(ScriptedAgent::new("hunter", script))),
        (sitter, Box::new(StayAgent)),
    ];

    let mut runner = GameRunner::new(engine, agents)
        .unwrap()
        .with_persistence(history_repo.clone(), agent_repo.clone());
    let report = runner.run_game().await.unwrap();

    assert_eq!(report.winners, vec![GladiatorId(0)]);
    assert_eq!(report.scores, vec![30, 0]);
    assert_eq!(report.history.len(), report.steps + 1);
    assert!(report.history[0].last_move.is_none());
    assert!(report.history.iter().skip(1).all(|r| r.last_move.is_some()));
    assert!(report.history.last().unwrap().game_state.game_over);

    let game_id = report.game_id.unwrap();
    let stored = history_repo.load_game_history(game_id).unwrap().unwrap();
    assert_eq!(stored.game_name, "Arena");
    assert_eq!(stored.records, report.history);
    assert_eq!(stored.records[0].player_ids, vec![attacker, sitter]);

    let winner = agent_repo.agent_results(attacker).unwrap().unwrap();
    assert_eq!(winner.num_games, 1);
    assert_eq!(winner.num_wins, 1);
    let loser = agent_repo.agent_results(sitter).unwrap().unwrap();
    assert_eq!(loser.num_wins, 0);

    let standings = agent_repo.load_game_results("arena").unwrap();
    assert_eq!(standings.len(), 2);
}

#[tokio::test]
async fn scenario_c_results_average_incrementally() {
    let repo = InMemoryAgentRepository::new();
    let id = repo.agent_id("ann", "bot", "arena").unwrap();

    repo.save_game_result(id, arena_runtime::GameId(0), "arena", 10, true)
        .unwrap();
    let results = repo
        .save_game_result(id, arena_runtime::GameId(1), "arena", 20, false)
        .unwrap();

    assert_eq!(results.num_games, 2);
    assert_eq!(results.num_wins, 1);
    assert!((results.avg_score - 15.0).abs() < 1e-9);
    assert_eq!(repo.agent_results(id).unwrap(), Some(results));
}

#[tokio::test]
async fn saving_for_an_unknown_agent_fails() {
    let engine = ArenaEngine::new(duel_config()).unwrap();
    let agent_repo = Arc::new(InMemoryAgentRepository::new());
    let agents: Vec<(AgentId, Box<dyn Agent>)> = vec![
        (AgentId(41), Box::new(AggressiveAgent)),
        (AgentId(42), Box::new(AggressiveAgent)),
    ];

    let mut runner = GameRunner::new(engine, agents)
        .unwrap()
        .with_persistence(Arc::new(InMemoryGameHistory::new()), agent_repo);
    let err = runner.run_game().await.unwrap_err();
    assert!(matches!(err, RuntimeError::Repository(_)));
}

#[tokio::test]
async fn step_limit_stops_endless_games() {
    let engine = ArenaEngine::new(duel_config()).unwrap();
    let agents: Vec<(AgentId, Box<dyn Agent>)> = vec![
        (AgentId(0), Box::new(StayAgent)),
        (AgentId(1), Box::new(StayAgent)),
    ];
    let mut runner = GameRunner::new(engine, agents).unwrap().with_max_steps(50);

    let err = runner.run_game().await.unwrap_err();
    assert!(matches!(err, RuntimeError::StepLimitExceeded(50)));
}

#[tokio::test]
async fn random_agents_replay_identically() {
    async fn play(seed: u64) -> Vec<u32> {
        let config = ArenaConfig::new()
            .with_variant(Variant::Pit)
            .with_seed(seed)
            .with_players(3)
            .with_max_events(500);
        let engine = ArenaEngine::new(config).unwrap();
        let agents: Vec<(AgentId, Box<dyn Agent>)> = (0..3)
            .map(|i| {
                (
                    AgentId(i),
                    Box::new(RandomAgent::new(seed + i)) as Box<dyn Agent>,
                )
            })
            .collect();
        let mut runner = GameRunner::new(engine, agents).unwrap();
        runner.run_game().await.unwrap().scores
    }

    assert_eq!(play(9).await, play(9).await);
}

#[tokio::test]
async fn aggressive_agents_finish_a_brawl() {
    let config = ArenaConfig::new().with_seed(4).with_players(4);
    let engine = ArenaEngine::new(config).unwrap();
    let agents: Vec<(AgentId, Box<dyn Agent>)> = (0..4)
        .map(|i| (AgentId(i), Box::new(AggressiveAgent) as Box<dyn Agent>))
        .collect();
    let mut runner = GameRunner::new(engine, agents).unwrap();
    let report = runner.run_game().await.unwrap();

    assert!(runner.engine().is_game_over());
    assert!(!report.winners.is_empty());
    let living = runner
        .engine()
        .state()
        .gladiators
        .iter()
        .filter(|g| g.is_alive())
        .count();
    assert!(living >= 1);
}
