use markup5ever_rcdom::Handle;

use crate::document::Microdata;

use super::dom::{get_node_attr, has_node_attr};

/// 提取元素上的微数据属性（itemscope、itemtype、itemprop）
///
/// 三个属性都不存在时返回 `None`，使输出中不出现 `microdata` 键。
pub fn extract_microdata(node: &Handle) -> Option<Microdata> {
    let microdata = Microdata {
        itemscope: has_node_attr(node, "itemscope"),
        itemtype: get_node_attr(node, "itemtype"),
        itemprop: get_node_attr(node, "itemprop"),
    };

    if microdata.is_empty() {
        None
    } else {
        Some(microdata)
    }
}
