//! Realtime side-channel
//!
//! A socket.io endpoint sharing the HTTP listener. Connections are only
//! logged for now; no business events are emitted over this channel.

use socketioxide::SocketIo;
use socketioxide::extract::SocketRef;

/// Register the root namespace handlers on the socket.io instance.
pub fn register(io: &SocketIo) {
    io.ns("/", on_connect);
}

async fn on_connect(socket: SocketRef) {
    tracing::info!(sid = %socket.id, "socket.io client connected");

    socket.on_disconnect(|socket: SocketRef| async move {
        tracing::info!(sid = %socket.id, "socket.io client disconnected");
    });
}
