use std::collections::HashMap;
use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::Mutex;

pub const UNICORN: &str = r#"{"name":"Unicorn","id":89,"description":"It's a unicorn.","weakness":"Earth","attackable":true,"aggressive":false,"poisonous":false,"xp":"60.9","lifepoints":1300,"level":15,"defence":9,"attack":1,"magic":1,"ranged":1,"size":2,"members":false,"slayercat":null,"slayerlevel":null,"animations":{"death":4266,"attack":4267},"areas":["Lumbridge","Falador area"]}"#;

pub const KALPHITE_QUEEN: &str = r#"{"name":"Kalphite Queen","id":49,"description":"An enormous armoured kalphite.","weakness":"Ranged","attackable":true,"aggressive":true,"poisonous":true,"xp":"2827.6","lifepoints":40000,"level":333,"defence":80,"attack":85,"magic":75,"ranged":75,"size":5,"members":true,"slayercat":"Kalphites","slayerlevel":1,"animations":{"death":20275,"attack":20276},"areas":["Kalphite Hive","Exiled Kalphite Hive"]}"#;

pub const GIANT_RAT: &str = r#"{"name":"Giant rat","id":50,"description":"Overgrown vermin.","weakness":null,"attackable":true,"aggressive":false,"poisonous":false,"xp":"18.2","lifepoints":250,"level":3,"defence":2,"attack":2,"magic":1,"ranged":1,"size":2,"members":false,"slayercat":null,"slayerlevel":null}"#;

pub const CATEGORY: &str = r#"{"types":[],"alpha":[{"letter":"#","items":0},{"letter":"a","items":4},{"letter":"b","items":2}]}"#;

pub const CATEGORY_PRICES: &str = r#"{"total":4,"items":[{"icon":"http://services.runescape.com/m=itemdb_rs/obj_sprite.gif?id=21787","icon_large":"http://services.runescape.com/m=itemdb_rs/obj_big.gif?id=21787","id":21787,"type":"Ammo","typeIcon":"http://www.runescape.com/img/categories/Ammo","name":"Ancient essence","description":"Used to recharge and imbue equipment.","current":{"trend":"neutral","price":180},"today":{"trend":"positive","price":"+2"},"members":"true"}]}"#;

pub const ITEM_DETAILS: &str = r#"{"item":{"icon":"http://services.runescape.com/m=itemdb_rs/obj_sprite.gif?id=4151","icon_large":"http://services.runescape.com/m=itemdb_rs/obj_big.gif?id=4151","id":4151,"type":"Melee weapons - high level","typeIcon":"http://www.runescape.com/img/categories/Melee2","name":"Abyssal whip","description":"A weapon from the abyss.","current":{"trend":"neutral","price":"5.7m"},"today":{"trend":"positive","price":"+198.3k"},"members":"true","day30":{"trend":"positive","change":"+1.0%"},"day90":{"trend":"negative","change":"-3.0%"},"day180":{"trend":"neutral","change":"0.0%"}}}"#;

pub const GRAPH: &str = r#"{"daily":{"1754179200000":5700000,"1754265600000":5650000,"notatime":1},"average":{"1754179200000":5710000}}"#;

pub const CLAN: &str = "Clanmate, Clan Rank, Total XP, Kills\nElder\u{a0}Druid, Owner, 5400000000, 12\nWhite Wolf, Deputy Owner, 160000000, 0\nMisfit, Admin, 1\n";

lazy_static::lazy_static! {
    static ref HITS: Mutex<HashMap<String, usize>> = Mutex::new(HashMap::new());

    static ref HOST: String = {
        let listener = TcpListener::bind("127.0.0.1:0")
            .expect("Failed to bind fixture server");

        let host = format!("http://{}", listener.local_addr()
            .expect("Failed to resolve fixture server address"));

        // Must land before the first wrapper reads the base URL
        std::env::set_var("RUNESCAPE_API_HOST", &host);

        std::thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                std::thread::spawn(move || handle(stream));
            }
        });

        host
    };
}

/// Base URL of the fixture server, starting it on first use
///
/// Every test that goes over the wire calls this before touching an
/// endpoint wrapper so the host override is already in place
pub fn host() -> &'static str {
    &HOST
}

/// How many times a `path?query` target has been requested
pub fn hits(target: &str) -> usize {
    HITS.lock()
        .expect("Fixture server hit counters poisoned")
        .get(target)
        .copied()
        .unwrap_or(0)
}

/// Hiscore CSV of `skills` skill rows followed by `activities` activity
/// rows, with the last row of each block unranked
fn player_body(skills: usize, activities: usize) -> String {
    let mut body = String::new();

    for i in 0..skills {
        if i == skills - 1 {
            body.push_str("-1,1,-1\n");
        }

        else {
            body.push_str(&format!("{},99,{}\n", i + 1, 14_000_000 + i));
        }
    }

    for j in 0..activities {
        if j == activities - 1 {
            body.push_str("-1,-1\n");
        }

        else {
            body.push_str(&format!("{},{}\n", j + 1, 500 + j));
        }
    }

    body
}

fn route(target: &str) -> (&'static str, String) {
    let body = match target {
        "/m=itemdb_rs/bestiary/beastData.json?beastid=89" => UNICORN.to_string(),
        "/m=itemdb_rs/bestiary/beastData.json?beastid=49" => KALPHITE_QUEEN.to_string(),
        "/m=itemdb_rs/bestiary/beastData.json?beastid=50" => GIANT_RAT.to_string(),

        // Blank "no data" page and a truncated body
        "/m=itemdb_rs/bestiary/beastData.json?beastid=1" => String::from("  \n"),
        "/m=itemdb_rs/bestiary/beastData.json?beastid=3" => String::from("{ \"name\": \"Unicorn\""),

        "/m=itemdb_rs/bestiary/beastData.json?beastid=4" => {
            return ("500 Internal Server Error", String::new());
        }

        "/m=itemdb_rs/bestiary/beastSearch.json?term=giant+rat" => {
            String::from(r#"[{"value":86,"label":"Giant rat"},{"value":4687,"label":null}]"#)
        }

        "/m=itemdb_rs/bestiary/bestiaryNames.json?letter=A" => {
            String::from(r#"[{"value":14,"label":"Aberrant spectre"},{"value":22,"label":"Abyssal demon"},{"value":48,"label":null}]"#)
        }

        "/m=itemdb_rs/bestiary/areaBeasts.json?identifier=Lumbridge+Swamp" => {
            String::from(r#"[{"value":47,"label":"Rat"},{"value":86,"label":"Giant rat"}]"#)
        }

        "/m=itemdb_rs/bestiary/slayerCatNames.json" => {
            String::from(r#"{"Bats":41,"Birds":39,"Aquanites":99}"#)
        }

        "/m=itemdb_rs/bestiary/slayerBeasts.json?identifier=41" => {
            String::from(r#"[{"value":16,"label":"Giant bat"},{"value":3153,"label":"Albino bat"}]"#)
        }

        "/m=itemdb_rs/bestiary/slayerBeasts.json?identifier=39" => {
            String::from(r#"[{"value":39,"label":"Chicken"},{"value":138,"label":"Seagull"}]"#)
        }

        "/m=itemdb_rs/bestiary/weaknessNames.json" => {
            String::from(r#"{"None":0,"Air":1,"Water":2,"Earth":3}"#)
        }

        "/m=itemdb_rs/bestiary/weaknessBeasts.json?identifier=3" => {
            String::from(r#"[{"value":89,"label":"Unicorn"},{"value":90,"label":"Black unicorn"}]"#)
        }

        "/m=itemdb_rs/bestiary/levelGroup.json?identifier=90-98" => {
            String::from(r#"[{"value":15194,"label":"Araxxor"}]"#)
        }

        "/m=itemdb_rs/api/catalogue/category.json?category=1" => CATEGORY.to_string(),
        "/m=itemdb_rs/api/catalogue/items.json?category=1&alpha=a&page=1" => CATEGORY_PRICES.to_string(),
        "/m=itemdb_rs/api/catalogue/items.json?category=1&alpha=%23&page=1" => String::from(r#"{"total":0,"items":[]}"#),
        "/m=itemdb_rs/api/catalogue/detail.json?item=4151" => ITEM_DETAILS.to_string(),
        "/m=itemdb_rs/api/graph/4151.json" => GRAPH.to_string(),

        "/m=hiscore/index_lite.ws?player=Zezima" => player_body(28, 22),
        "/m=hiscore_oldschool/index_lite.ws?player=Lynx+Titan" => player_body(24, 3),
        "/m=hiscore/index_lite.ws?player=Truncated" => String::from("36,99,14000000\n-1,-1\n"),
        "/m=hiscore/index_lite.ws?player=Corrupt" => format!("oops,99,14000000\n{}", player_body(27, 22)),

        "/m=clan-hiscores/members_lite.ws?clanName=Maxed" => CLAN.to_string(),

        _ => return ("404 Not Found", String::new())
    };

    ("200 OK", body)
}

fn read_target(stream: &TcpStream) -> Option<String> {
    let mut reader = BufReader::new(stream);

    let mut request_line = String::new();

    reader.read_line(&mut request_line).ok()?;

    // Drain the headers
    loop {
        let mut line = String::new();

        if reader.read_line(&mut line).ok()? == 0 || line.trim().is_empty() {
            break;
        }
    }

    Some(request_line.split_whitespace().nth(1)?.to_string())
}

fn handle(mut stream: TcpStream) {
    let Some(target) = read_target(&stream) else {
        return;
    };

    *HITS.lock()
        .expect("Fixture server hit counters poisoned")
        .entry(target.clone())
        .or_insert(0) += 1;

    let (status, body) = route(&target);

    let response = format!(
        "HTTP/1.1 {status}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );

    let _ = stream.write_all(response.as_bytes());
}
