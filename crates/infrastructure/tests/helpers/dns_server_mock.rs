#![allow(dead_code)]
use hickory_proto::op::{Message, MessageType, OpCode, ResponseCode};
use hickory_proto::rr::rdata::{A, NS, TXT};
use hickory_proto::rr::{Name, RData, Record, RecordType};
use hickory_proto::serialize::binary::BinEncodable;
use std::net::{Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream, UdpSocket};
use tokio::sync::oneshot;

pub type Handler = Arc<dyn Fn(&Message) -> Option<Message> + Send + Sync>;

/// In-process UDP DNS server answering with a caller-supplied handler.
/// A handler returning `None` drops the query.
pub struct MockDnsServer {
    addr: SocketAddr,
    received: Arc<Mutex<Vec<Message>>>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start(handler: Handler) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind("127.0.0.1:0").await?;
        let addr = socket.local_addr()?;
        let received = Arc::new(Mutex::new(Vec::new()));
        let log = received.clone();

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 4096];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => break,
                    result = socket.recv_from(&mut buf) => {
                        let Ok((len, peer)) = result else { continue };
                        let Ok(query) = Message::from_vec(&buf[..len]) else { continue };
                        log.lock().unwrap().push(query.clone());

                        if let Some(response) = handler(&query) {
                            if let Ok(bytes) = response.to_bytes() {
                                let _ = socket.send_to(&bytes, peer).await;
                            }
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            received,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    pub fn received(&self) -> Vec<Message> {
        self.received.lock().unwrap().clone()
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

/// In-process TCP DNS server (length-prefixed framing), bound next to a UDP
/// mock on the same port so a TC retry reaches it.
pub struct MockTcpDnsServer {
    addr: SocketAddr,
    received: Arc<Mutex<Vec<Message>>>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockTcpDnsServer {
    pub async fn start_on(port: u16, handler: Handler) -> Result<Self, std::io::Error> {
        let listener = TcpListener::bind(("127.0.0.1", port)).await?;
        let addr = listener.local_addr()?;
        let received = Arc::new(Mutex::new(Vec::new()));
        let log = received.clone();

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => break,
                    result = listener.accept() => {
                        let Ok((stream, _)) = result else { continue };
                        let handler = handler.clone();
                        let log = log.clone();
                        tokio::spawn(async move {
                            let _ = serve_tcp(stream, handler, log).await;
                        });
                    }
                }
            }
        });

        Ok(Self {
            addr,
            received,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn received(&self) -> Vec<Message> {
        self.received.lock().unwrap().clone()
    }
}

impl Drop for MockTcpDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

async fn serve_tcp(
    mut stream: TcpStream,
    handler: Handler,
    log: Arc<Mutex<Vec<Message>>>,
) -> Result<(), std::io::Error> {
    let mut len_buf = [0u8; 2];
    stream.read_exact(&mut len_buf).await?;
    let mut buf = vec![0u8; u16::from_be_bytes(len_buf) as usize];
    stream.read_exact(&mut buf).await?;

    let Ok(query) = Message::from_vec(&buf) else {
        return Ok(());
    };
    log.lock().unwrap().push(query.clone());

    if let Some(response) = handler(&query) {
        if let Ok(bytes) = response.to_bytes() {
            stream.write_all(&(bytes.len() as u16).to_be_bytes()).await?;
            stream.write_all(&bytes).await?;
            stream.flush().await?;
        }
    }
    Ok(())
}

pub fn name(s: &str) -> Name {
    Name::from_str(s).unwrap()
}

/// A response echoing the question of `query`.
pub fn reply_to(query: &Message) -> Message {
    let mut response = Message::new(query.id(), MessageType::Response, OpCode::Query);
    response.set_response_code(ResponseCode::NoError);
    response.set_recursion_desired(query.recursion_desired());
    for q in query.queries() {
        response.add_query(q.clone());
    }
    response
}

pub fn question(query: &Message) -> (Name, RecordType) {
    let q = &query.queries()[0];
    (q.name().clone(), q.query_type())
}

/// Answers every A query with `ip`.
pub fn fixed_a(ip: Ipv4Addr) -> Handler {
    Arc::new(move |query: &Message| {
        let (qname, _) = question(query);
        let mut response = reply_to(query);
        response.add_answer(Record::from_rdata(qname, 60, RData::A(A(ip))));
        Some(response)
    })
}

/// Refers every NS query to `glue`, and answers the final ANY query with `ip`.
pub fn delegating(glue: Ipv4Addr, ip: Ipv4Addr) -> Handler {
    Arc::new(move |query: &Message| {
        let (qname, qtype) = question(query);
        let mut response = reply_to(query);
        match qtype {
            RecordType::NS => {
                let ns_name = name("ns1.mock-servers.test.");
                response.add_name_server(Record::from_rdata(
                    qname,
                    172800,
                    RData::NS(NS(ns_name.clone())),
                ));
                response.add_additional(Record::from_rdata(ns_name, 172800, RData::A(A(glue))));
            }
            _ => {
                response.add_answer(Record::from_rdata(qname, 300, RData::A(A(ip))));
            }
        }
        Some(response)
    })
}

/// Answers with an empty, truncated response, as a UDP server does when the
/// real answer does not fit.
pub fn truncating() -> Handler {
    Arc::new(|query: &Message| {
        let mut response = reply_to(query);
        response.set_truncated(true);
        Some(response)
    })
}

/// Answers every TXT query with `count` strings.
pub fn large_txt(count: usize) -> Handler {
    Arc::new(move |query: &Message| {
        let (qname, _) = question(query);
        let mut response = reply_to(query);
        for i in 0..count {
            response.add_answer(Record::from_rdata(
                qname.clone(),
                300,
                RData::TXT(TXT::new(vec![format!("record-{i}-{}", "x".repeat(40))])),
            ));
        }
        Some(response)
    })
}

pub fn silent() -> Handler {
    Arc::new(|_: &Message| None)
}
