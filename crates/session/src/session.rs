use super::chat::Chat;
use super::code::Code;
use super::limiter::Limiter;
use super::player::Player;
use super::rejection::Rejection;
use super::round::Round;
use super::settings::Settings;
use super::state::State;
use super::summary::Summary;
use derby_betting::Ledger;
use derby_cards::*;
use derby_core::*;

/// A multiplayer betting session.
///
/// Players join by code, pick a horse and ready up in the lobby. The
/// master starts a round, which shuffles a fresh deck, simulates the whole
/// race, and books the payouts immediately; [`Session::finish`] moves the
/// session to victory once the replay is over. Net balances run across
/// rounds in a [`Ledger`] and are settled when the master ends the session.
///
/// Every operation either applies completely or returns a [`Rejection`]
/// and leaves the session untouched.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Session {
    code: Code,
    settings: Settings,
    master: PlayerId,
    state: State,
    players: Vec<Player>,
    rounds: Vec<Round>,
    ledger: Ledger,
    summary: Option<Summary>,
    chat: Vec<Chat>,
}

impl Session {
    /// Opens a session in the lobby with its creator as master.
    pub fn create(
        name: &str,
        pin: &str,
        settings: Settings,
        code: Code,
    ) -> Result<Self, Rejection> {
        let master = Player::new(name, pin, true)?;
        let mut ledger = Ledger::default();
        ledger.open(master.id, master.name.clone());
        log::info!("session {} created by {} ({})", code, master.name, settings);
        Ok(Self {
            code,
            settings,
            master: master.id,
            state: State::Lobby,
            players: vec![master],
            rounds: Vec::new(),
            ledger,
            summary: None,
            chat: Vec::new(),
        })
    }

    /// Adds a player, or reconnects the one with the same name and PIN.
    pub fn join(&mut self, name: &str, pin: &str) -> Result<PlayerId, Rejection> {
        Player::validate(name)?;
        if !(PIN_MIN..=PIN_MAX).contains(&pin.chars().count()) {
            return Err(Rejection::InvalidPin);
        }
        match self.state {
            State::Ended => return Err(Rejection::Ended),
            State::Racing => return Err(Rejection::Racing),
            _ => {}
        }
        if let Some(player) = self.players.iter_mut().find(|p| p.is(name, pin)) {
            player.connected = true;
            log::info!("{} reconnected to {}", player.name, self.code);
            return Ok(player.id);
        }
        let player = Player::new(name, pin, false)?;
        let id = player.id;
        self.ledger.open(id, player.name.clone());
        log::info!("{} joined {}", player.name, self.code);
        self.players.push(player);
        Ok(id)
    }

    /// Picks a horse. Accepts a [`Suit`] or its letter.
    pub fn select<S>(&mut self, player: PlayerId, suit: S) -> Result<(), Rejection>
    where
        S: TryInto<Suit>,
    {
        let suit = suit.try_into().map_err(|_| Rejection::InvalidSuit)?;
        self.ensure_open()?;
        let player = self.player_mut(player)?;
        if player.is_ready() {
            return Err(Rejection::AlreadyReady);
        }
        player.suit = Some(suit);
        Ok(())
    }

    /// Readies up, stamping `now`, or stands down.
    pub fn ready(&mut self, player: PlayerId, ready: bool, now: Millis) -> Result<(), Rejection> {
        self.ensure_open()?;
        let player = self.player_mut(player)?;
        if ready && player.suit.is_none() {
            return Err(Rejection::NoHorse);
        }
        player.ready = ready.then_some(now);
        Ok(())
    }

    pub fn disconnect(&mut self, player: PlayerId) -> Result<(), Rejection> {
        let player = self.player_mut(player)?;
        player.connected = false;
        log::info!("{} disconnected", player.name);
        Ok(())
    }

    /// Starts a round with a freshly shuffled deck.
    pub fn start(&mut self, player: PlayerId, now: Millis) -> Result<&Round, Rejection> {
        self.start_with(player, now, &mut rand::rng())
    }
    pub fn start_with<R>(
        &mut self,
        player: PlayerId,
        now: Millis,
        rng: &mut R,
    ) -> Result<&Round, Rejection>
    where
        R: rand::Rng,
    {
        self.ensure_master(player)?;
        if !self.state.can_start() {
            log::warn!("{} cannot start a round while {}", self.code, self.state);
            return Err(Rejection::CannotStart);
        }
        let entrants = self
            .players
            .iter()
            .filter_map(Player::entrant)
            .collect::<Vec<_>>();
        if entrants.len() < MIN_READY {
            log::warn!("{} has only {} ready players", self.code, entrants.len());
            return Err(Rejection::NotEnoughPlayers);
        }
        let deck = Deck::shuffled_with(self.settings.decks, rng);
        let round = Round::play(deck, &self.settings, entrants, now);
        self.ledger.apply(&round.entrants, &round.payouts);
        self.state = State::Racing;
        log::info!("{} round {}: {}", self.code, self.rounds.len() + 1, round);
        self.rounds.push(round);
        Ok(&self.rounds[self.rounds.len() - 1])
    }

    /// Moves a racing session to victory. Returns whether it did; repeated
    /// calls are harmless.
    pub fn finish(&mut self) -> bool {
        if self.state == State::Racing {
            self.state = State::Victory;
            log::info!("{} race finished", self.code);
            true
        } else {
            false
        }
    }

    /// Returns everyone to the lobby with no pick and no ready stamp.
    pub fn lobby(&mut self, player: PlayerId) -> Result<(), Rejection> {
        self.ensure_master(player)?;
        self.ensure_open()?;
        self.players.iter_mut().for_each(Player::reset);
        self.state = State::Lobby;
        log::info!("{} back to lobby", self.code);
        Ok(())
    }

    /// Ends the session and settles every balance. Ending an ended session
    /// returns the same summary.
    pub fn end(&mut self, player: PlayerId) -> Result<&Summary, Rejection> {
        self.ensure_master(player)?;
        if self.summary.is_none() {
            let summary = Summary::from(&self.ledger);
            log::info!(
                "{} ended after {} rounds with {} transfers",
                self.code,
                self.rounds.len(),
                summary.transfers.len()
            );
            self.state = State::Ended;
            self.summary = Some(summary);
        }
        self.summary.as_ref().ok_or(Rejection::Ended)
    }

    /// Posts a chat message, rate limited per session and player.
    pub fn say(
        &mut self,
        player: PlayerId,
        message: &str,
        limiter: &mut Limiter,
        now: Millis,
    ) -> Result<&Chat, Rejection> {
        self.ensure_open()?;
        let text = Chat::validate(message)?;
        let name = self.player(player)?.name.clone();
        if !limiter.allow(&format!("{}:{}", self.code, player), now) {
            return Err(Rejection::TooFast);
        }
        self.chat.push(Chat {
            from: player,
            name,
            message: text.to_string(),
            at: now,
        });
        Ok(&self.chat[self.chat.len() - 1])
    }

    pub fn code(&self) -> &Code {
        &self.code
    }
    pub fn settings(&self) -> &Settings {
        &self.settings
    }
    pub fn master(&self) -> PlayerId {
        self.master
    }
    pub fn state(&self) -> State {
        self.state
    }
    pub fn players(&self) -> &[Player] {
        &self.players
    }
    pub fn player(&self, id: PlayerId) -> Result<&Player, Rejection> {
        self.players
            .iter()
            .find(|p| p.id == id)
            .ok_or(Rejection::UnknownPlayer)
    }
    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }
    /// The most recent round, if any has started.
    pub fn round(&self) -> Option<&Round> {
        self.rounds.last()
    }
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }
    /// Net points of one player across all rounds.
    pub fn net(&self, id: PlayerId) -> Points {
        self.ledger.net(&id)
    }
    /// Total points staked across all rounds.
    pub fn played(&self) -> Points {
        self.ledger.played()
    }
    pub fn summary(&self) -> Option<&Summary> {
        self.summary.as_ref()
    }
    pub fn chat(&self) -> &[Chat] {
        &self.chat
    }

    fn player_mut(&mut self, id: PlayerId) -> Result<&mut Player, Rejection> {
        self.players
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(Rejection::UnknownPlayer)
    }
    fn ensure_master(&self, id: PlayerId) -> Result<(), Rejection> {
        if self.master == id {
            Ok(())
        } else {
            Err(Rejection::NotMaster)
        }
    }
    fn ensure_open(&self) -> Result<(), Rejection> {
        if self.state.is_ended() {
            Err(Rejection::Ended)
        } else {
            Ok(())
        }
    }
}

impl std::fmt::Display for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "{} [{}] {}", self.code, self.state, self.settings)?;
        for player in self.players.iter() {
            writeln!(f, "  {:<32}{:+}", player.to_string(), self.net(player.id))?;
        }
        Ok(())
    }
}
