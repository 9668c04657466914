use hb_core::context::{MessageLog, ScriptedInput};
use hb_core::magic::{EffectLog, ElementKind, set_ele_attack, set_ele_immune};
use hb_core::player::{Player, PlayerClass, RedrawFlags, UpdateFlags};
use hb_core::status::{PlayerStun, StatusSetter, StunRank};
use hb_core::{FixedRng, GameContext, GameOptions, Locale};

#[test]
fn test_stun_sixty_then_reset() {
    let mut stun = PlayerStun::default();
    stun.set(60);
    assert_eq!(stun.get_rank(), StunRank::Hard);
    assert_eq!(stun.decrease_chance(), 25);
    assert_eq!(stun.decrease_damage(), 20);

    stun.reset();
    assert_eq!(stun.current(), 0);
    assert_eq!(stun.get_rank(), StunRank::None);
    assert_eq!(stun.decrease_chance(), 0);
    assert_eq!(stun.decrease_damage(), 0);
}

#[test]
fn test_stun_rank_boundaries() {
    assert_eq!(PlayerStun::rank_of(0), StunRank::None);
    assert_eq!(PlayerStun::rank_of(1), StunRank::Normal);
    assert_eq!(PlayerStun::rank_of(50), StunRank::Normal);
    assert_eq!(PlayerStun::rank_of(51), StunRank::Hard);
    assert_eq!(PlayerStun::rank_of(100), StunRank::Hard);
    assert_eq!(PlayerStun::rank_of(101), StunRank::Unconscious);
}

#[test]
fn test_stun_label_in_japanese() {
    let mut stun = PlayerStun::default();
    stun.set(150);
    let (_, label) = stun.get_expr(Locale::Japanese);
    assert_eq!(label, "意識不明瞭  ");
}

#[test]
fn test_setter_and_brand_share_bookkeeping() {
    let mut player = Player::new(PlayerClass::Paladin, 35);
    let mut rng = FixedRng::Max;
    let mut effects = EffectLog::new();
    let mut input = ScriptedInput::declining();
    let mut log = MessageLog::new();
    let options = GameOptions::default();
    let mut ctx = GameContext::new(
        &mut player,
        &mut rng,
        &mut effects,
        &mut input,
        &mut log,
        &options,
    );

    StatusSetter::new(&mut ctx).set_stun(120);
    set_ele_attack(&mut ctx, Some(ElementKind::Acid), 40);
    set_ele_attack(&mut ctx, Some(ElementKind::Elec), 40);
    set_ele_immune(&mut ctx, Some(ElementKind::Fire), 40);

    assert_eq!(player.stun.get_rank(), StunRank::Unconscious);
    assert!(player.brand.has(ElementKind::Elec));
    assert!(!player.brand.has(ElementKind::Acid));
    assert!(player.immunity.has(ElementKind::Fire));
    assert!(player.update.contains(UpdateFlags::BONUS));
    assert!(player.redraw.contains(RedrawFlags::STATUS));
    assert_eq!(
        log.messages(),
        [
            "You have been knocked out.",
            "For a while, the blows you deal will melt with acid!",
            "Your temporary acidic brand fades away.",
            "For a while, the blows you deal will shock your foes!",
            "For a while, you are immune to fire!",
        ]
    );
}

#[test]
fn test_player_state_survives_json() {
    let mut player = Player::new(PlayerClass::Priest, 30);
    player.stun.set(75);
    player.timed.hero = 12;

    let json = serde_json::to_string(&player).unwrap();
    let back: Player = serde_json::from_str(&json).unwrap();
    assert_eq!(back.stun.get_rank(), StunRank::Hard);
    assert_eq!(back, player);
}
