use crate::mpris::MprisHandle;
use crate::player::Player;

pub fn update_mpris(mpris: &MprisHandle, player: &Player) {
    let index = player.current_index();
    mpris.set_track_metadata(Some(index), Some(player.current_track()));
    mpris.set_length_seconds(player.total_seconds());
    mpris.set_playing(player.is_playing());
}
