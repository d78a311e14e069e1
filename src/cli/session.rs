use crate::application::lending::ServiceDependencies;
use std::io;
use tokio::io::{AsyncBufRead, AsyncWrite};

use super::{
    console::Console,
    handlers::{Flow, dispatch},
    menu::{MENU, MenuChoice},
};

/// 終了時の表示
pub const GOODBYE: &str = "Goodbye!";

/// メニューループを実行する
///
/// 1回のループで1コマンドを最後まで処理してから次の入力を読む。
/// 不正な選択や業務エラーではループを抜けない。
/// 終了するのは `6` が選ばれたとき、または入力が終わったときのみ。
///
/// # エラー
/// 入出力そのものの失敗
pub async fn run<R, W>(console: &mut Console<R, W>, deps: &ServiceDependencies) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    loop {
        console.write(MENU).await?;

        let Some(line) = console.read_line().await? else {
            // 入力終了は Exit と同じ扱い
            console.say("").await?;
            break;
        };

        let flow = match line.parse::<MenuChoice>() {
            Ok(choice) => {
                tracing::debug!(?choice, "Menu choice");
                dispatch(console, deps, choice).await?
            }
            Err(invalid) => {
                console.say(invalid.message()).await?;
                Flow::Continue
            }
        };

        if flow == Flow::Exit {
            break;
        }
    }

    console.say(GOODBYE).await
}
