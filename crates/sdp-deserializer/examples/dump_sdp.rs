use std::env;
use std::process::exit;

use sdp_deserializer::model::attribute::RtpMap;
use sdp_deserializer::{Deserializer, SdpField};

use tracing::{error, info};

const OFFER: &str = "v=0\r
o=- 4611731400430051336 2 IN IP4 127.0.0.1\r
s=-\r
t=0 0\r
a=group:BUNDLE 0 1\r
m=audio 9 UDP/TLS/RTP/SAVPF 111 0\r
c=IN IP4 0.0.0.0\r
b=AS:64\r
a=sendrecv\r
a=rtpmap:111 opus/48000/2\r
a=rtpmap:0 PCMU/8000\r
m=video 9 UDP/TLS/RTP/SAVPF 96\r
c=IN IP4 0.0.0.0\r
a=rtpmap:96 VP8/90000\r
";

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let message = match env::args().nth(1) {
        Some(path) => std::fs::read_to_string(&path).expect("failed to read sdp file"),
        None => OFFER.to_string(),
    };

    let de = Deserializer::new(&message).expect("empty sdp message");
    for line in de {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                error!(error = %e, "failed to read line");
                exit(1)
            }
        };
        match line.field() {
            Ok(SdpField::Origin(o)) => info!(
                username = o.username,
                session_id = o.session_id,
                session_version = o.session_version,
                address = o.connection_info.address,
                "origin"
            ),
            Ok(SdpField::Connection(c)) => {
                info!(address_type = %c.address_type, address = c.address, "connection")
            }
            Ok(SdpField::Bandwidth(b)) => {
                info!(kind = ?b.kind(), bandwidth = b.bandwidth, "bandwidth")
            }
            Ok(SdpField::Timing(t)) => info!(
                start = t.start_time,
                stop = t.stop_time,
                permanent = t.is_permanent(),
                "timing"
            ),
            Ok(SdpField::Media(m)) => info!(
                media = m.media,
                port = m.port,
                protocol = m.protocol,
                formats = m.formats,
                "media"
            ),
            Ok(SdpField::Attribute(a)) => match a.decode::<RtpMap>() {
                Some(Ok(map)) => info!(
                    payload_type = map.payload_type,
                    encoding = map.encoding_name,
                    clock_rate = map.clock_rate,
                    "rtpmap"
                ),
                Some(Err(e)) => error!(error = %e, "bad rtpmap"),
                None => info!(name = a.name, value = ?a.value, "attribute"),
            },
            Ok(SdpField::Other { line_type, value }) => info!(%line_type, value, "line"),
            Err(e) => error!(line = line.raw(), error = %e, "malformed field"),
        }
    }
}
