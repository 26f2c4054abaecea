use anyhow::Context;
use clap::Parser;
use derby_cards::*;
use derby_core::*;
use derby_race::*;
use derby_session::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub enum Command {
    #[command(about = "Simulate one race and print its timeline", alias = "r")]
    Race {
        #[arg(long, default_value_t = 1)]
        decks: u8,
        #[arg(long, default_value_t = 8)]
        track: u8,
        #[arg(long)]
        seed: Option<u64>,
    },
    #[command(
        about = "Play a whole session with random picks and print the settlement",
        alias = "s"
    )]
    Session {
        #[arg(long, default_value_t = 4)]
        players: usize,
        #[arg(long, default_value_t = 5)]
        rounds: usize,
        #[arg(long, default_value_t = 1)]
        decks: u8,
        #[arg(long, default_value_t = 8)]
        track: u8,
        #[arg(long, default_value_t = 10)]
        bet: Points,
        #[arg(long)]
        seed: Option<u64>,
    },
}

impl Command {
    pub fn run(self) -> anyhow::Result<()> {
        match self {
            Self::Race { decks, track, seed } => Self::race(decks, track, seed),
            Self::Session {
                players,
                rounds,
                decks,
                track,
                bet,
                seed,
            } => Self::session(players, rounds, Settings::new(bet, decks, track)?, seed),
        }
    }

    fn rng(seed: Option<u64>) -> SmallRng {
        match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_rng(&mut rand::rng()),
        }
    }

    fn race(decks: u8, track: u8, seed: Option<u64>) -> anyhow::Result<()> {
        let decks = Decks::try_from(decks).map_err(anyhow::Error::msg)?;
        let track = Track::try_from(track).map_err(anyhow::Error::msg)?;
        let ref mut rng = Self::rng(seed);
        let deck = Deck::shuffled_with(decks, rng);
        let outcome = Race::simulate(deck.cards(), track);
        log::info!(
            "{} deck(s) on a {} track, gates at {:?}",
            decks.count(),
            track.length(),
            track.thresholds()
        );
        print!("{}", outcome);
        println!("{} [{}]", outcome.winner.name(), outcome.positions);
        Ok(())
    }

    fn session(
        players: usize,
        rounds: usize,
        settings: Settings,
        seed: Option<u64>,
    ) -> anyhow::Result<()> {
        let ref mut rng = Self::rng(seed);
        let mut session = Session::create("player1", "0000", settings, Code::random_with(rng))?;
        let master = session.master();
        let mut ids = vec![master];
        for i in 2..=players {
            ids.push(session.join(&format!("player{}", i), "0000")?);
        }
        let mut now = 0;
        for _ in 0..rounds {
            for id in ids.iter() {
                session.select(*id, Suit::all()[rng.random_range(0..Suit::all().len())])?;
                session.ready(*id, true, now)?;
                now += rng.random_range(1..1000);
            }
            let round = session.start_with(master, now, rng)?;
            println!("{}", round);
            now = round.end();
            anyhow::ensure!(session.finish(), "session {} did not finish", session.code());
            session.lobby(master)?;
        }
        print!("{}", session);
        let summary = session.end(master).context("ending session")?;
        print!("{}", summary);
        Ok(())
    }
}
